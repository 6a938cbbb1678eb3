// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Read-only access to identity records.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::types::IdentityRecord;

/// Capability to fetch an [`IdentityRecord`] by name.
///
/// Implementations must report a missing record as [`FetchError::NotFound`]
/// and never fabricate an empty record in its place. Timeouts and retries are
/// the implementation's concern.
#[async_trait]
pub trait IdentityLookup: Send + Sync {
	async fn fetch_identity_by_name(&self, name: &str) -> Result<IdentityRecord, FetchError>;
}

/// Fixed set of identities held in memory, for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityLookup {
	identities: HashMap<String, IdentityRecord>,
}

impl InMemoryIdentityLookup {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `identity` under its own name, replacing any previous record.
	pub fn insert(&mut self, identity: IdentityRecord) {
		self.identities.insert(identity.name.clone(), identity);
	}

	pub fn with_identity(mut self, identity: IdentityRecord) -> Self {
		self.insert(identity);
		self
	}
}

impl FromIterator<IdentityRecord> for InMemoryIdentityLookup {
	fn from_iter<I: IntoIterator<Item = IdentityRecord>>(iter: I) -> Self {
		let mut lookup = Self::new();
		for identity in iter {
			lookup.insert(identity);
		}
		lookup
	}
}

#[async_trait]
impl IdentityLookup for InMemoryIdentityLookup {
	async fn fetch_identity_by_name(&self, name: &str) -> Result<IdentityRecord, FetchError> {
		self
			.identities
			.get(name)
			.cloned()
			.ok_or_else(|| FetchError::NotFound {
				name: name.to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn returns_stored_identity() {
		let lookup = InMemoryIdentityLookup::new()
			.with_identity(IdentityRecord::new("htpasswd:alice").with_extra("email", "a@example.com"));

		let identity = lookup.fetch_identity_by_name("htpasswd:alice").await.unwrap();
		assert_eq!(identity.extra.get("email").map(String::as_str), Some("a@example.com"));
	}

	#[tokio::test]
	async fn missing_identity_is_not_found() {
		let lookup = InMemoryIdentityLookup::new();
		let err = lookup.fetch_identity_by_name("htpasswd:ghost").await.unwrap_err();
		assert!(matches!(err, FetchError::NotFound { name } if name == "htpasswd:ghost"));
	}

	#[tokio::test]
	async fn insert_replaces_by_name() {
		let lookup: InMemoryIdentityLookup = vec![
			IdentityRecord::new("idp:x").with_extra("email", "old@example.com"),
			IdentityRecord::new("idp:x").with_extra("email", "new@example.com"),
		]
		.into_iter()
		.collect();

		let identity = lookup.fetch_identity_by_name("idp:x").await.unwrap();
		assert_eq!(identity.extra["email"], "new@example.com");
	}
}
