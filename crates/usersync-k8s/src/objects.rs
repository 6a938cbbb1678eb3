// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Conversion of `user.openshift.io/v1` objects into core records.
//!
//! The OpenShift types are not part of `k8s-openapi`, so they are read as
//! [`DynamicObject`]s and their bodies deserialized into the minimal field sets
//! below.

use std::collections::BTreeMap;

use kube::api::{ApiResource, DynamicObject, GroupVersionKind};
use serde::Deserialize;
use usersync_core::{IdentityRecord, PlatformUser};

use crate::error::{K8sError, K8sResult};

pub const USER_API_GROUP: &str = "user.openshift.io";
pub const USER_API_VERSION: &str = "v1";

/// API resource for cluster-scoped `Identity` objects.
pub fn identity_resource() -> ApiResource {
	let gvk = GroupVersionKind::gvk(USER_API_GROUP, USER_API_VERSION, "Identity");
	ApiResource::from_gvk_with_plural(&gvk, "identities")
}

/// API resource for cluster-scoped `User` objects.
pub fn user_resource() -> ApiResource {
	let gvk = GroupVersionKind::gvk(USER_API_GROUP, USER_API_VERSION, "User");
	ApiResource::from_gvk_with_plural(&gvk, "users")
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityFields {
	#[serde(default)]
	provider_name: String,
	#[serde(default)]
	provider_user_name: String,
	#[serde(default)]
	extra: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserFields {
	#[serde(default)]
	full_name: Option<String>,
	#[serde(default)]
	identities: Option<Vec<String>>,
}

fn object_name(kind: &'static str, obj: &DynamicObject) -> K8sResult<String> {
	obj
		.metadata
		.name
		.clone()
		.filter(|n| !n.is_empty())
		.ok_or_else(|| K8sError::InvalidObject {
			kind,
			name: String::new(),
			message: "missing metadata.name".to_string(),
		})
}

fn fields<T>(kind: &'static str, name: &str, obj: &DynamicObject) -> K8sResult<T>
where
	T: for<'de> Deserialize<'de> + Default,
{
	if obj.data.is_null() {
		return Ok(T::default());
	}
	serde_json::from_value(obj.data.clone()).map_err(|e| K8sError::InvalidObject {
		kind,
		name: name.to_string(),
		message: e.to_string(),
	})
}

/// Reads an `Identity` object.
pub fn identity_from_object(obj: &DynamicObject) -> K8sResult<IdentityRecord> {
	let name = object_name("Identity", obj)?;
	let body: IdentityFields = fields("Identity", &name, obj)?;

	Ok(IdentityRecord {
		name,
		provider_name: body.provider_name,
		provider_user_name: body.provider_user_name,
		extra: body.extra.unwrap_or_default(),
	})
}

/// Reads a `User` object. The UID comes from object metadata.
pub fn user_from_object(obj: &DynamicObject) -> K8sResult<PlatformUser> {
	let name = object_name("User", obj)?;
	let body: UserFields = fields("User", &name, obj)?;

	Ok(PlatformUser {
		name,
		uid: obj.metadata.uid.clone(),
		full_name: body.full_name.filter(|n| !n.is_empty()),
		identities: body.identities.unwrap_or_default(),
	})
}
