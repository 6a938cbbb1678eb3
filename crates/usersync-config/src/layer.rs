// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by each source.

use serde::Deserialize;

use crate::sections::{ClusterConfigLayer, LoggingConfigLayer, SsoConfigLayer};

/// One source's view of the configuration. Unset sections stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
	#[serde(default)]
	pub cluster: Option<ClusterConfigLayer>,
	#[serde(default)]
	pub sso: Option<SsoConfigLayer>,
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(b), Some(o)) => merge(b, o),
		(None, Some(o)) => *base = Some(o),
		(_, None) => {}
	}
}

impl ConfigLayer {
	/// Overlay `other` onto `self`; fields set in `other` win.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
		merge_section(&mut self.cluster, other.cluster, ClusterConfigLayer::merge);
		merge_section(&mut self.sso, other.sso, SsoConfigLayer::merge);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_fills_missing_sections() {
		let mut base = ConfigLayer::default();
		base.merge(ConfigLayer {
			cluster: Some(ClusterConfigLayer {
				request_timeout_secs: Some(10),
			}),
			..Default::default()
		});
		assert_eq!(base.cluster.unwrap().request_timeout_secs, Some(10));
		assert!(base.logging.is_none());
	}

	#[test]
	fn test_merge_keeps_unset_fields() {
		let mut base = ConfigLayer {
			sso: Some(SsoConfigLayer {
				identity_provider: Some("rhd".to_string()),
			}),
			..Default::default()
		};
		base.merge(ConfigLayer {
			sso: Some(SsoConfigLayer::default()),
			..Default::default()
		});
		assert_eq!(
			base.sso.unwrap().identity_provider.as_deref(),
			Some("rhd")
		);
	}
}
