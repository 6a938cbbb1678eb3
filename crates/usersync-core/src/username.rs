// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Provider-valid account names for mirrored users.
//!
//! The SSO provider accepts only `[a-z0-9]` plus [`INVALID_CHARACTER_REPLACEMENT`]
//! in generated names. Display names coming from the cluster are free-form, so
//! they are lower-cased, every run of other characters is collapsed into one
//! replacement character, and the result is tagged with
//! [`GENERATED_NAME_PREFIX`]. A federated identity's user ID, when present, is
//! appended verbatim to keep otherwise colliding names apart.
//!
//! Two users whose names sanitize to the same value and who have no federated
//! identity still collide; nothing here disambiguates them.

use crate::types::MirroredAccountDraft;

/// Prefix marking an account name as generated rather than chosen.
pub const GENERATED_NAME_PREFIX: &str = "generated-";

/// Stand-in for any run of characters outside `[a-z0-9]`.
pub const INVALID_CHARACTER_REPLACEMENT: char = '-';

/// Generates the account name for `draft` from its current username and first
/// federated identity.
pub fn generate_account_name(draft: &MirroredAccountDraft) -> String {
	generate_account_name_from(&draft.username, draft.federated_user_id())
}

/// Generates an account name from a raw display name and an optional
/// federated user ID. Empty IDs are ignored.
pub fn generate_account_name_from(display_name: &str, federated_id: Option<&str>) -> String {
	let mut name = String::with_capacity(GENERATED_NAME_PREFIX.len() + display_name.len());
	name.push_str(GENERATED_NAME_PREFIX);
	name.push_str(&sanitize(display_name));

	if let Some(id) = federated_id.filter(|id| !id.is_empty()) {
		if !name.ends_with(INVALID_CHARACTER_REPLACEMENT) {
			name.push(INVALID_CHARACTER_REPLACEMENT);
		}
		name.push_str(id);
	}

	name
}

fn is_allowed(c: char) -> bool {
	c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Lower-cases, collapses disallowed runs and trims replacement characters
/// from both ends. The prefix already supplies the leading separator.
fn sanitize(raw: &str) -> String {
	let lowered = raw.to_lowercase();
	let mut out = String::with_capacity(lowered.len());
	let mut in_run = false;

	for c in lowered.chars() {
		if is_allowed(c) {
			out.push(c);
			in_run = false;
		} else if !in_run {
			out.push(INVALID_CHARACTER_REPLACEMENT);
			in_run = true;
		}
	}

	out
		.trim_matches(INVALID_CHARACTER_REPLACEMENT)
		.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::FederatedIdentity;
	use proptest::prelude::*;

	const USER_ID: &str = "54d19771-aab6-49bb-913f-ce94e0ae5600";

	fn named(username: &str) -> MirroredAccountDraft {
		MirroredAccountDraft::new(username)
	}

	#[test]
	fn username_is_lower_cased() {
		assert_eq!(generate_account_name(&named("TEST")), "generated-test");
	}

	#[test]
	fn invalid_characters_are_replaced() {
		assert_eq!(
			generate_account_name(&named("TEST_USER@Example.com")),
			"generated-test-user-example-com"
		);
	}

	#[test]
	fn replacement_is_not_added_to_the_end() {
		assert_eq!(generate_account_name(&named("Tester01#")), "generated-tester01");
	}

	#[test]
	fn federated_user_id_is_appended() {
		let draft = named("Tester.01#")
			.with_federated_identity(FederatedIdentity::new("openshift-v4", USER_ID, "Tester.01#"));
		assert_eq!(
			generate_account_name(&draft),
			format!("generated-tester-01-{USER_ID}")
		);
	}

	#[test]
	fn runs_collapse_to_one_replacement() {
		assert_eq!(generate_account_name_from("a..__--b", None), "generated-a-b");
	}

	#[test]
	fn leading_invalid_characters_do_not_double_the_separator() {
		assert_eq!(generate_account_name_from("#admin", None), "generated-admin");
	}

	#[test]
	fn empty_name_is_just_the_prefix() {
		assert_eq!(generate_account_name_from("", None), GENERATED_NAME_PREFIX);
		assert_eq!(generate_account_name_from("@@@", None), GENERATED_NAME_PREFIX);
	}

	#[test]
	fn empty_name_with_federated_id_has_single_separator() {
		assert_eq!(
			generate_account_name_from("", Some(USER_ID)),
			format!("generated-{USER_ID}")
		);
	}

	#[test]
	fn empty_federated_id_is_ignored() {
		assert_eq!(generate_account_name_from("bob", Some("")), "generated-bob");
		let draft = named("bob").with_federated_identity(FederatedIdentity::default());
		assert_eq!(generate_account_name(&draft), "generated-bob");
	}

	#[test]
	fn only_first_federated_identity_is_used() {
		let draft = named("bob")
			.with_federated_identity(FederatedIdentity::new("a", "first", "bob"))
			.with_federated_identity(FederatedIdentity::new("b", "second", "bob"));
		assert_eq!(generate_account_name(&draft), "generated-bob-first");
	}

	#[test]
	fn non_ascii_letters_are_replaced() {
		assert_eq!(generate_account_name_from("José Núñez", None), "generated-jos-n-ez");
	}

	#[test]
	fn valid_name_is_kept() {
		assert_eq!(generate_account_name_from("alice42", None), "generated-alice42");
	}

	proptest! {
		#[test]
		fn output_uses_allowed_alphabet(raw in ".{0,40}") {
			let name = generate_account_name_from(&raw, None);
			prop_assert!(name.starts_with(GENERATED_NAME_PREFIX));
			prop_assert!(name.chars().all(|c| is_allowed(c) || c == INVALID_CHARACTER_REPLACEMENT));
		}

		#[test]
		fn no_consecutive_or_trailing_replacement(raw in ".{1,40}") {
			let name = generate_account_name_from(&raw, None);
			prop_assert!(!name.contains("--"));
			prop_assert!(name == GENERATED_NAME_PREFIX || !name.ends_with(INVALID_CHARACTER_REPLACEMENT));
		}

		#[test]
		fn federated_id_is_verbatim_suffix(raw in ".{0,40}", id in "[0-9a-f]{8}-[0-9a-f]{4}") {
			let name = generate_account_name_from(&raw, Some(&id));
			let base = generate_account_name_from(&raw, None);
			prop_assert!(name.ends_with(&id));
			prop_assert!(!name[..name.len() - id.len()].ends_with("--"));
			prop_assert!(name.starts_with(base.trim_end_matches(INVALID_CHARACTER_REPLACEMENT)));
		}

		#[test]
		fn deterministic(raw in ".{0,40}") {
			prop_assert_eq!(generate_account_name_from(&raw, None), generate_account_name_from(&raw, None));
		}
	}
}
