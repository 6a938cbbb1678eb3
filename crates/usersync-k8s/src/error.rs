// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;
use usersync_core::FetchError;

/// Result type alias for K8s operations.
pub type K8sResult<T> = Result<T, K8sError>;

/// Errors that can occur during K8s operations.
#[derive(Error, Debug)]
pub enum K8sError {
	#[error("K8s API error: {message}")]
	ApiError { message: String },

	#[error("{kind} not found: {name}")]
	NotFound { kind: &'static str, name: String },

	#[error("Invalid {kind} object {name}: {message}")]
	InvalidObject {
		kind: &'static str,
		name: String,
		message: String,
	},

	#[error("Operation timed out")]
	Timeout,
}

impl From<kube::Error> for K8sError {
	fn from(err: kube::Error) -> Self {
		K8sError::ApiError {
			message: err.to_string(),
		}
	}
}

impl From<K8sError> for FetchError {
	fn from(err: K8sError) -> Self {
		match err {
			K8sError::NotFound { name, .. } => FetchError::NotFound { name },
			other => FetchError::backend(other),
		}
	}
}
