// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Records consumed and produced by a reconciliation pass.
//!
//! [`PlatformUser`] and [`IdentityRecord`] mirror the cluster's
//! `user.openshift.io/v1` `User` and `Identity` objects and are read-only
//! inputs. [`MirroredAccountDraft`] is the account submitted to the SSO
//! provider and serializes in the provider's camelCase representation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A cluster-native user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUser {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub uid: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub full_name: Option<String>,
	/// Identity references, primary first. May be empty.
	#[serde(default)]
	pub identities: Vec<String>,
}

impl PlatformUser {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
		self.identities.push(identity.into());
		self
	}

	/// The identity reference consulted for email resolution.
	pub fn primary_identity(&self) -> Option<&str> {
		self.identities.first().map(String::as_str)
	}
}

/// A linked external-auth identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
	pub name: String,
	#[serde(default)]
	pub provider_name: String,
	#[serde(default)]
	pub provider_user_name: String,
	/// Provider-supplied attributes such as `email`. Keys are unique.
	#[serde(default)]
	pub extra: BTreeMap<String, String>,
}

impl IdentityRecord {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}
}

/// The same person as known to an identity broker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedIdentity {
	pub identity_provider: String,
	pub user_id: String,
	pub user_name: String,
}

impl FederatedIdentity {
	pub fn new(
		identity_provider: impl Into<String>,
		user_id: impl Into<String>,
		user_name: impl Into<String>,
	) -> Self {
		Self {
			identity_provider: identity_provider.into(),
			user_id: user_id.into(),
			user_name: user_name.into(),
		}
	}
}

/// Set of provider required-action codes.
///
/// Serializes as a sorted array; duplicates in input collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredActions(BTreeSet<String>);

impl RequiredActions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `action`, returning `false` if it was already present.
	pub fn insert(&mut self, action: impl Into<String>) -> bool {
		self.0.insert(action.into())
	}

	pub fn contains(&self, action: &str) -> bool {
		self.0.contains(action)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}
}

impl<S: Into<String>> FromIterator<S> for RequiredActions {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

/// Account being built for the SSO provider during one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirroredAccountDraft {
	pub username: String,
	/// Empty when unknown.
	#[serde(default)]
	pub email: String,
	#[serde(default = "default_enabled")]
	pub enabled: bool,
	#[serde(default)]
	pub required_actions: RequiredActions,
	#[serde(default)]
	pub federated_identities: Vec<FederatedIdentity>,
}

fn default_enabled() -> bool {
	true
}

impl MirroredAccountDraft {
	pub fn new(username: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			email: String::new(),
			enabled: true,
			required_actions: RequiredActions::new(),
			federated_identities: Vec::new(),
		}
	}

	pub fn with_federated_identity(mut self, identity: FederatedIdentity) -> Self {
		self.federated_identities.push(identity);
		self
	}

	/// Identifier of the first federated identity, if it is non-empty.
	pub fn federated_user_id(&self) -> Option<&str> {
		self
			.federated_identities
			.first()
			.map(|f| f.user_id.as_str())
			.filter(|id| !id.is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn required_actions_are_a_set() {
		let mut actions = RequiredActions::new();
		assert!(actions.insert("VERIFY_EMAIL"));
		assert!(!actions.insert("VERIFY_EMAIL"));
		assert_eq!(actions.len(), 1);
		assert!(actions.contains("VERIFY_EMAIL"));
	}

	#[test]
	fn required_actions_deserialize_dedups() {
		let actions: RequiredActions =
			serde_json::from_str(r#"["UPDATE_PROFILE","CONFIGURE_TOTP","UPDATE_PROFILE"]"#).unwrap();
		assert_eq!(actions.len(), 2);
		assert_eq!(
			serde_json::to_string(&actions).unwrap(),
			r#"["CONFIGURE_TOTP","UPDATE_PROFILE"]"#
		);
	}

	#[test]
	fn draft_serializes_in_provider_shape() {
		let draft = MirroredAccountDraft::new("generated-alice").with_federated_identity(
			FederatedIdentity::new("openshift-v4", "0b1c", "alice"),
		);
		let json = serde_json::to_value(&draft).unwrap();

		assert_eq!(json["username"], "generated-alice");
		assert_eq!(json["email"], "");
		assert_eq!(json["enabled"], true);
		assert_eq!(json["requiredActions"], serde_json::json!([]));
		assert_eq!(json["federatedIdentities"][0]["identityProvider"], "openshift-v4");
		assert_eq!(json["federatedIdentities"][0]["userId"], "0b1c");
		assert_eq!(json["federatedIdentities"][0]["userName"], "alice");
	}

	#[test]
	fn draft_defaults_when_fields_missing() {
		let draft: MirroredAccountDraft = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
		assert_eq!(draft, MirroredAccountDraft::new("bob"));
	}

	#[test]
	fn federated_user_id_ignores_empty_identifier() {
		let draft =
			MirroredAccountDraft::new("x").with_federated_identity(FederatedIdentity::default());
		assert_eq!(draft.federated_user_id(), None);

		let draft = MirroredAccountDraft::new("x")
			.with_federated_identity(FederatedIdentity::new("idp", "abc", "x"));
		assert_eq!(draft.federated_user_id(), Some("abc"));
	}

	#[test]
	fn primary_identity_is_first_entry() {
		let user = PlatformUser::new("alice")
			.with_identity("htpasswd:alice")
			.with_identity("github:alice");
		assert_eq!(user.primary_identity(), Some("htpasswd:alice"));
		assert_eq!(PlatformUser::new("nobody").primary_identity(), None);
	}
}
