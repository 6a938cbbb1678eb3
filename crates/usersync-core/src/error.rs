// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors returned by an [`IdentityLookup`](crate::IdentityLookup) backend.
#[derive(Error, Debug)]
pub enum FetchError {
	#[error("identity not found: {name}")]
	NotFound { name: String },

	#[error("identity backend error: {0}")]
	Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FetchError {
	/// Wrap an arbitrary backend failure.
	pub fn backend<E>(err: E) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		FetchError::Backend(Box::new(err))
	}
}

/// The email of a platform user could not be determined.
///
/// This is never "no email": a user whose identity simply lacks the attribute
/// resolves to an empty string instead.
#[derive(Error, Debug)]
pub enum LookupError {
	#[error("user {user} has no linked identities")]
	NoIdentities { user: String },

	#[error("failed to fetch identity {identity}")]
	Fetch {
		identity: String,
		#[source]
		source: FetchError,
	},
}

impl LookupError {
	/// Whether the primary identity is missing, as opposed to the lookup itself failing.
	pub fn is_not_found(&self) -> bool {
		matches!(
			self,
			LookupError::NoIdentities { .. }
				| LookupError::Fetch {
					source: FetchError::NotFound { .. },
					..
				}
		)
	}
}
