// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod cluster;
mod logging;
mod sso;

pub use cluster::{ClusterConfig, ClusterConfigLayer, DEFAULT_REQUEST_TIMEOUT_SECS};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use sso::{SsoConfig, SsoConfigLayer, DEFAULT_IDENTITY_PROVIDER};
