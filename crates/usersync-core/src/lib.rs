// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Provisioning helpers for mirroring platform users into an SSO provider.
//!
//! A reconciliation pass builds a [`MirroredAccountDraft`] for each platform
//! user and runs it through three independent steps:
//!
//! - [`generate_account_name`]: derives a provider-valid username
//! - [`resolve_email`]: reads the verified email from the user's primary
//!   linked identity via an [`IdentityLookup`]
//! - [`enforce_profile_action`]: forces profile completion when no email is
//!   known
//!
//! All steps are stateless. Ordering is up to the caller.

pub mod email;
pub mod error;
pub mod lookup;
pub mod profile;
pub mod types;
pub mod username;

pub use email::{resolve_email, EMAIL_ATTRIBUTE};
pub use error::{FetchError, LookupError};
pub use lookup::{IdentityLookup, InMemoryIdentityLookup};
pub use profile::{enforce_profile_action, UPDATE_PROFILE};
pub use types::{FederatedIdentity, IdentityRecord, MirroredAccountDraft, PlatformUser, RequiredActions};
pub use username::{
	generate_account_name, generate_account_name_from, GENERATED_NAME_PREFIX,
	INVALID_CHARACTER_REPLACEMENT,
};
