// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use tracing::info;
use usersync_core::{
	enforce_profile_action, generate_account_name, resolve_email, FederatedIdentity,
	IdentityLookup, LookupError, MirroredAccountDraft, PlatformUser,
};

/// Builds the mirrored account for `user` in reconciliation order: name,
/// email, then profile action.
///
/// `display_name` overrides the user name as input to name generation. The
/// federated identity links the account to `identity_provider` by the user's
/// UID and is omitted when the user has no UID.
pub async fn build_draft<L>(
	lookup: &L,
	user: &PlatformUser,
	identity_provider: &str,
	display_name: Option<&str>,
) -> Result<MirroredAccountDraft, LookupError>
where
	L: IdentityLookup + ?Sized,
{
	let mut draft = MirroredAccountDraft::new(display_name.unwrap_or(&user.name));
	if let Some(uid) = user.uid.as_deref().filter(|uid| !uid.is_empty()) {
		draft = draft.with_federated_identity(FederatedIdentity::new(
			identity_provider,
			uid,
			user.name.as_str(),
		));
	}

	draft.username = generate_account_name(&draft);
	draft.email = resolve_email(lookup, user).await?;
	enforce_profile_action(&mut draft);

	info!(
		user = %user.name,
		username = %draft.username,
		has_email = !draft.email.is_empty(),
		required_actions = draft.required_actions.len(),
		"built mirrored account draft"
	);

	Ok(draft)
}
