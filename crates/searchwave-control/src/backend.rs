//! Trait seam between the reconciler and the deployment API.
//!
//! The reconciler only needs a handful of accessor calls; abstracting them
//! behind a trait allows mock implementations in tests.

use async_trait::async_trait;
use searchwave_api::{ApiClient, Deployment, DeploymentUser};

/// The accessor surface the reconciler drives.
#[async_trait]
pub trait DeploymentBackend: Send + Sync {
    /// Fetch one deployment by uid.
    async fn get_deployment(&self, account: &str, uid: &str)
        -> searchwave_api::Result<Deployment>;

    /// Create a deployment; the result carries the server-assigned fields.
    async fn create_deployment(
        &self,
        account: &str,
        deployment: &Deployment,
    ) -> searchwave_api::Result<Deployment>;

    /// Request deletion of a deployment.
    async fn delete_deployment(&self, account: &str, uid: &str) -> searchwave_api::Result<()>;

    /// Create a Solr auth user on a deployment.
    async fn create_deployment_user(
        &self,
        account: &str,
        uid: &str,
        user: &DeploymentUser,
    ) -> searchwave_api::Result<DeploymentUser>;

    /// Delete a Solr auth user from a deployment.
    async fn delete_deployment_user(
        &self,
        account: &str,
        uid: &str,
        username: &str,
    ) -> searchwave_api::Result<()>;
}

#[async_trait]
impl DeploymentBackend for ApiClient {
    async fn get_deployment(
        &self,
        account: &str,
        uid: &str,
    ) -> searchwave_api::Result<Deployment> {
        ApiClient::get_deployment(self, account, uid).await
    }

    async fn create_deployment(
        &self,
        account: &str,
        deployment: &Deployment,
    ) -> searchwave_api::Result<Deployment> {
        ApiClient::create_deployment(self, account, deployment).await
    }

    async fn delete_deployment(&self, account: &str, uid: &str) -> searchwave_api::Result<()> {
        ApiClient::delete_deployment(self, account, uid).await
    }

    async fn create_deployment_user(
        &self,
        account: &str,
        uid: &str,
        user: &DeploymentUser,
    ) -> searchwave_api::Result<DeploymentUser> {
        ApiClient::create_deployment_user(self, account, uid, user).await
    }

    async fn delete_deployment_user(
        &self,
        account: &str,
        uid: &str,
        username: &str,
    ) -> searchwave_api::Result<()> {
        ApiClient::delete_deployment_user(self, account, uid, username).await
    }
}
