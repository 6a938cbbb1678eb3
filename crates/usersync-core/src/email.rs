// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use tracing::{debug, warn};

use crate::error::LookupError;
use crate::lookup::IdentityLookup;
use crate::types::PlatformUser;

/// Identity attribute holding the provider-verified email.
pub const EMAIL_ATTRIBUTE: &str = "email";

/// Resolves the email of `user` from its primary linked identity.
///
/// Only the first identity is consulted. An identity without an email
/// attribute yields an empty string; a failed lookup is an error and must not
/// be treated as "no email".
pub async fn resolve_email<L>(lookup: &L, user: &PlatformUser) -> Result<String, LookupError>
where
	L: IdentityLookup + ?Sized,
{
	let identity_name = user
		.primary_identity()
		.ok_or_else(|| LookupError::NoIdentities {
			user: user.name.clone(),
		})?;

	let identity = lookup
		.fetch_identity_by_name(identity_name)
		.await
		.map_err(|source| {
			warn!(user = %user.name, identity = %identity_name, error = %source, "identity lookup failed");
			LookupError::Fetch {
				identity: identity_name.to_string(),
				source,
			}
		})?;

	let email = identity
		.extra
		.get(EMAIL_ATTRIBUTE)
		.cloned()
		.unwrap_or_default();

	debug!(
		user = %user.name,
		identity = %identity_name,
		has_email = !email.is_empty(),
		"resolved identity email"
	);

	Ok(email)
}
