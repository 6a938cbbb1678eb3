// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cluster API access configuration.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Cluster configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct ClusterConfig {
	pub request_timeout_secs: u64,
}

impl Default for ClusterConfig {
	fn default() -> Self {
		Self {
			request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
		}
	}
}

impl ClusterConfig {
	pub fn request_timeout(&self) -> Duration {
		Duration::from_secs(self.request_timeout_secs)
	}
}

/// Cluster configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterConfigLayer {
	#[serde(default)]
	pub request_timeout_secs: Option<u64>,
}

impl ClusterConfigLayer {
	pub fn merge(&mut self, other: ClusterConfigLayer) {
		if other.request_timeout_secs.is_some() {
			self.request_timeout_secs = other.request_timeout_secs;
		}
	}

	pub fn finalize(self) -> ClusterConfig {
		ClusterConfig {
			request_timeout_secs: self
				.request_timeout_secs
				.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
		}
	}
}
