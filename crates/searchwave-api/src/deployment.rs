//! Deployment records and their resource accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, DeleteEnvelope};
use crate::error::Result;

/// One provisioned search cluster.
///
/// `uid` is empty until the backend assigns it on creation. `status`,
/// `provision_state`, and `http_endpoint` are authoritative only once the
/// backend has reported a terminal state; identity for all operations is the
/// `(account, uid)` pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    /// Backend-assigned unique identifier.
    pub uid: String,
    /// Human-readable cluster name.
    pub name: String,
    /// Application kind, e.g. `"Solr"`.
    pub application: String,
    /// Application version, e.g. `"8.11.2"`.
    pub application_version: String,
    /// Pricing tier, e.g. `"Gold"`.
    pub tier: String,
    /// Endpoint assigned once the cluster is running.
    pub http_endpoint: String,
    /// Backend lifecycle status (`"Running"`, `"Failed"`, ...).
    pub status: String,
    /// Backend provisioning state (`"Done"` once finished).
    pub provision_state: String,
    /// When set, the backend refuses termination requests.
    pub termination_lock: bool,
    /// Plan name.
    pub plan: String,
    /// Plan type.
    pub plan_type: String,
    /// Master/slave topology flag.
    pub is_master_slave: bool,
    /// VPC type.
    pub vpc_type: String,
    /// VPC name.
    pub vpc_name: String,
    /// Region identifier, e.g. `"us-east-1"`.
    pub region_id: String,
    /// Cloud provider name.
    pub cloud_provider: String,
    /// Cloud provider identifier.
    pub cloud_provider_id: String,
    /// Deployment type.
    pub deployment_type: String,
    /// Additional app nodes beyond the default topology.
    pub num_additional_app_nodes: i64,
    /// Default node count for the plan.
    pub num_nodes_default: i64,
    /// Numeric id of the attached private VPC, zero when none.
    pub private_vpc: i64,
    /// Creation timestamp as reported by the backend.
    pub date_created: String,
}

impl Deployment {
    /// Parse the backend's creation timestamp, if present and RFC 3339.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date_created)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Paginated deployment listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeploymentList {
    /// Total number of deployments in the account.
    pub count: i32,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// Deployments on this page.
    pub results: Vec<Deployment>,
}

impl ApiClient {
    /// List all deployments in an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn list_deployments(&self, account: &str) -> Result<DeploymentList> {
        self.get_json(&format!("/account/{account}/deployment/"))
            .await
    }

    /// Fetch one deployment by uid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::Remote`] with status 404 if the deployment
    /// does not exist.
    pub async fn get_deployment(&self, account: &str, uid: &str) -> Result<Deployment> {
        self.get_json(&format!("/account/{account}/deployment/{uid}/"))
            .await
    }

    /// Create a deployment.
    ///
    /// The returned record carries the server-assigned fields (`uid`,
    /// `status`, `provision_state`). Provisioning continues asynchronously
    /// after this call returns; poll [`ApiClient::get_deployment`] to observe
    /// convergence.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn create_deployment(
        &self,
        account: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        let created = self
            .post_json(&format!("/account/{account}/deployment/"), deployment)
            .await?;
        tracing::debug!(account, name = %deployment.name, "deployment create accepted");
        Ok(created)
    }

    /// Request deletion of a deployment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::Rejected`] with the backend's message when
    /// the confirmation envelope does not report the literal `"true"`.
    pub async fn delete_deployment(&self, account: &str, uid: &str) -> Result<()> {
        let envelope: DeleteEnvelope = self
            .delete_json(&format!("/account/{account}/deployment/{uid}/"))
            .await?;
        envelope.into_result()
    }
}
