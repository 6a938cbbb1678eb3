// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use kube::api::{Api, DynamicObject};
use kube::Client;
use tracing::{debug, instrument};
use usersync_core::{FetchError, IdentityLookup, IdentityRecord, PlatformUser};

use crate::error::{K8sError, K8sResult};
use crate::objects::{identity_from_object, identity_resource, user_from_object, user_resource};

/// Reads OpenShift users and identities from the cluster.
///
/// Every request is bounded by `request_timeout`; there are no retries.
#[derive(Clone)]
pub struct KubeIdentityLookup {
	identities: Api<DynamicObject>,
	users: Api<DynamicObject>,
	request_timeout: Duration,
}

impl KubeIdentityLookup {
	pub fn new(client: Client, request_timeout: Duration) -> Self {
		Self {
			identities: Api::all_with(client.clone(), &identity_resource()),
			users: Api::all_with(client, &user_resource()),
			request_timeout,
		}
	}

	/// Connect using the ambient kubeconfig or in-cluster service account.
	pub async fn try_default(request_timeout: Duration) -> K8sResult<Self> {
		let client = Client::try_default().await?;
		Ok(Self::new(client, request_timeout))
	}

	#[instrument(skip(self), fields(kind = "Identity"))]
	pub async fn get_identity(&self, name: &str) -> K8sResult<IdentityRecord> {
		let obj = self.get("Identity", &self.identities, name).await?;
		identity_from_object(&obj)
	}

	#[instrument(skip(self), fields(kind = "User"))]
	pub async fn fetch_user(&self, name: &str) -> K8sResult<PlatformUser> {
		let obj = self.get("User", &self.users, name).await?;
		user_from_object(&obj)
	}

	async fn get(
		&self,
		kind: &'static str,
		api: &Api<DynamicObject>,
		name: &str,
	) -> K8sResult<DynamicObject> {
		debug!(name, "fetching object");
		with_timeout(self.request_timeout, api.get(name))
			.await?
			.map_err(|err| classify(kind, name, err))
	}
}

async fn with_timeout<F, T>(timeout: Duration, fut: F) -> K8sResult<T>
where
	F: Future<Output = T>,
{
	tokio::time::timeout(timeout, fut)
		.await
		.map_err(|_| K8sError::Timeout)
}

fn classify(kind: &'static str, name: &str, err: kube::Error) -> K8sError {
	match err {
		kube::Error::Api(resp) if resp.code == 404 => K8sError::NotFound {
			kind,
			name: name.to_string(),
		},
		other => other.into(),
	}
}

#[async_trait]
impl IdentityLookup for KubeIdentityLookup {
	async fn fetch_identity_by_name(&self, name: &str) -> Result<IdentityRecord, FetchError> {
		self.get_identity(name).await.map_err(FetchError::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use kube::error::ErrorResponse;

	fn api_error(code: u16) -> kube::Error {
		kube::Error::Api(ErrorResponse {
			status: "Failure".to_string(),
			message: "boom".to_string(),
			reason: "Whatever".to_string(),
			code,
		})
	}

	#[test]
	fn classify_maps_404_to_not_found() {
		let err = classify("Identity", "htpasswd:ghost", api_error(404));
		assert!(matches!(
			err,
			K8sError::NotFound { kind: "Identity", ref name } if name == "htpasswd:ghost"
		));
	}

	#[test]
	fn classify_keeps_other_api_errors() {
		let err = classify("User", "alice", api_error(403));
		assert!(matches!(err, K8sError::ApiError { .. }));
	}

	#[tokio::test]
	async fn timeout_is_reported() {
		let result = with_timeout(Duration::from_millis(10), std::future::pending::<()>()).await;
		assert!(matches!(result, Err(K8sError::Timeout)));
	}

	#[tokio::test]
	async fn completed_future_passes_through() {
		let result = with_timeout(Duration::from_secs(1), async { 7 }).await;
		assert_eq!(result.unwrap(), 7);
	}
}
