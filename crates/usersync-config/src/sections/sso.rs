// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SSO provider settings used when building mirrored accounts.

use serde::Deserialize;

/// Identity provider alias the SSO realm uses for the cluster's OAuth server.
pub const DEFAULT_IDENTITY_PROVIDER: &str = "openshift-v4";

/// SSO configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct SsoConfig {
	pub identity_provider: String,
}

impl Default for SsoConfig {
	fn default() -> Self {
		Self {
			identity_provider: DEFAULT_IDENTITY_PROVIDER.to_string(),
		}
	}
}

/// SSO configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SsoConfigLayer {
	#[serde(default)]
	pub identity_provider: Option<String>,
}

impl SsoConfigLayer {
	pub fn merge(&mut self, other: SsoConfigLayer) {
		if other.identity_provider.is_some() {
			self.identity_provider = other.identity_provider;
		}
	}

	pub fn finalize(self) -> SsoConfig {
		SsoConfig {
			identity_provider: self
				.identity_provider
				.unwrap_or_else(|| DEFAULT_IDENTITY_PROVIDER.to_string()),
		}
	}
}
