// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Cluster access for usersync.
//!
//! [`KubeIdentityLookup`] implements [`usersync_core::IdentityLookup`] against
//! the OpenShift `user.openshift.io/v1` API and fetches the `User` records
//! that drive a provisioning pass.

pub mod client;
pub mod error;
pub mod objects;

pub use client::KubeIdentityLookup;
pub use error::{K8sError, K8sResult};
pub use objects::{identity_from_object, user_from_object};
