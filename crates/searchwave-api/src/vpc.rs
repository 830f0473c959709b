//! Private VPC records. Read-only: the API only offers listing.

use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::Result;

/// One private VPC attachable to deployments.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrivateVpc {
    /// Numeric identifier.
    pub id: i64,
    /// Owning account name.
    pub account: String,
    /// VPC name.
    pub name: String,
    /// Backend-reported status.
    pub status: String,
    /// Region the VPC lives in.
    pub region: String,
    /// CIDR address space.
    pub address_space: String,
}

/// Paginated private VPC listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrivateVpcList {
    /// Total number of VPCs in the account.
    pub count: i32,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// VPCs on this page.
    pub results: Vec<PrivateVpc>,
}

impl ApiClient {
    /// List the private VPCs of an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn list_private_vpcs(&self, account: &str) -> Result<PrivateVpcList> {
        self.get_json(&format!("/account/{account}/privatevpc/")).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn list_decodes_vpcs() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/account/acct1/privatevpc/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{
                    "id": 42,
                    "account": "acct1",
                    "name": "prod-vpc",
                    "status": "Active",
                    "region": "us-east-1",
                    "address_space": "10.0.0.0/16"
                }]
            })))
            .mount(&server)
            .await;

        let client = ApiClient::anonymous(server.uri());
        let list = client.list_private_vpcs("acct1").await.unwrap();
        assert_eq!(list.count, 1);
        assert_eq!(list.results[0].id, 42);
        assert_eq!(list.results[0].address_space, "10.0.0.0/16");
    }
}
