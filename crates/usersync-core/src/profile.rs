// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use tracing::info;

use crate::types::MirroredAccountDraft;

/// Required action forcing the user through profile completion at next login.
pub const UPDATE_PROFILE: &str = "UPDATE_PROFILE";

/// Marks a draft without an email for profile completion.
///
/// Returns `true` if the action was added by this call. Drafts with an email
/// are left untouched, and existing actions are never removed.
pub fn enforce_profile_action(draft: &mut MirroredAccountDraft) -> bool {
	if !draft.email.is_empty() {
		return false;
	}

	let added = draft.required_actions.insert(UPDATE_PROFILE);
	if added {
		info!(username = %draft.username, "user has no email, requiring profile update");
	}
	added
}
