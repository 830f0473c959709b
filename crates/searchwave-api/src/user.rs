//! Solr auth users and their resource accessors.
//!
//! User endpoints live under the owning deployment at
//! `/account/{account}/deployment/{uid}/solr/auth/`. There is no per-user
//! item endpoint; lookups go through the listing.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, DeleteEnvelope};
use crate::error::{ApiError, Result};

/// One Solr auth credential scoped to a deployment.
///
/// Identity is the `(account, deployment uid, username)` triple. The backend
/// sends these fields with capitalized JSON keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentUser {
    /// Owning deployment uid, echoed by the backend.
    #[serde(rename = "UID")]
    pub uid: String,
    /// Login name.
    #[serde(rename = "Username")]
    pub username: String,
    /// Password in clear text, as the backend expects it.
    #[serde(rename = "Password")]
    pub password: String,
    /// Role granted to the credential.
    #[serde(rename = "Roles")]
    pub role: String,
}

/// Listing envelope for deployment users.
///
/// Unlike the deletion envelope, `success` here is a native JSON boolean;
/// the asymmetry is the backend's and is preserved literally.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeploymentUserList {
    /// Whether the backend served the listing.
    pub success: bool,
    /// Users configured on the deployment.
    pub users: Vec<DeploymentUser>,
}

/// Envelope returned by the add-user endpoint.
#[derive(Debug, Deserialize)]
struct UserActionResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
}

/// Request body for the delete-user endpoint.
#[derive(Debug, Serialize)]
struct DeleteUserRequest<'a> {
    username: &'a str,
}

impl ApiClient {
    /// List the Solr auth users of a deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn list_deployment_users(
        &self,
        account: &str,
        uid: &str,
    ) -> Result<DeploymentUserList> {
        self.get_json(&format!(
            "/account/{account}/deployment/{uid}/solr/auth/get-users/"
        ))
        .await
    }

    /// Look up one user by name, via the listing.
    ///
    /// Returns `None` when no user with that name exists on the deployment.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing request fails.
    pub async fn get_deployment_user(
        &self,
        account: &str,
        uid: &str,
        username: &str,
    ) -> Result<Option<DeploymentUser>> {
        let list = self.list_deployment_users(account, uid).await?;
        Ok(list.users.into_iter().find(|u| u.username == username))
    }

    /// Create a Solr auth user on a deployment.
    ///
    /// The backend echoes no record, only a confirmation; on success the
    /// submitted user is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend's message when the
    /// confirmation reports failure.
    pub async fn create_deployment_user(
        &self,
        account: &str,
        uid: &str,
        user: &DeploymentUser,
    ) -> Result<DeploymentUser> {
        // The add-user path carries no trailing slash upstream.
        let response: UserActionResponse = self
            .post_json(
                &format!("/account/{account}/deployment/{uid}/solr/auth/add-user"),
                user,
            )
            .await?;

        if response.success {
            tracing::debug!(account, uid, username = %user.username, "deployment user created");
            Ok(user.clone())
        } else {
            Err(ApiError::Rejected(response.message))
        }
    }

    /// Delete a Solr auth user from a deployment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend's message when the
    /// confirmation envelope does not report the literal `"true"`.
    pub async fn delete_deployment_user(
        &self,
        account: &str,
        uid: &str,
        username: &str,
    ) -> Result<()> {
        let envelope: DeleteEnvelope = self
            .post_json(
                &format!("/account/{account}/deployment/{uid}/solr/auth/delete-user/"),
                &DeleteUserRequest { username },
            )
            .await?;
        envelope.into_result()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn users_body() -> serde_json::Value {
        json!({
            "success": true,
            "users": [
                {"UID": "ss123456", "Username": "indexer", "Password": "pw1", "Roles": "rw"},
                {"UID": "ss123456", "Username": "reader", "Password": "pw2", "Roles": "ro"}
            ]
        })
    }

    #[tokio::test]
    async fn list_decodes_capitalized_keys() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/account/acct1/deployment/ss123456/solr/auth/get-users/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .mount(&server)
            .await;

        let client = ApiClient::anonymous(server.uri());
        let list = client
            .list_deployment_users("acct1", "ss123456")
            .await
            .unwrap();
        assert!(list.success);
        assert_eq!(list.users.len(), 2);
        assert_eq!(list.users[0].username, "indexer");
        assert_eq!(list.users[0].role, "rw");
    }

    #[tokio::test]
    async fn get_user_filters_the_listing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/account/acct1/deployment/ss123456/solr/auth/get-users/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
            .mount(&server)
            .await;

        let client = ApiClient::anonymous(server.uri());
        let user = client
            .get_deployment_user("acct1", "ss123456", "reader")
            .await
            .unwrap();
        assert_eq!(user.unwrap().password, "pw2");

        let missing = client
            .get_deployment_user("acct1", "ss123456", "ghost")
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn create_user_returns_the_submitted_record() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/account/acct1/deployment/ss123456/solr/auth/add-user"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": ""})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::with_token(server.uri(), "sstoken");
        let user = DeploymentUser {
            uid: "ss123456".to_string(),
            username: "indexer".to_string(),
            password: "pw1".to_string(),
            role: "rw".to_string(),
        };
        let created = client
            .create_deployment_user("acct1", "ss123456", &user)
            .await
            .unwrap();
        assert_eq!(created, user);
    }

    #[tokio::test]
    async fn create_user_rejection_surfaces_the_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/account/acct1/deployment/ss123456/solr/auth/add-user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "user already exists"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::with_token(server.uri(), "sstoken");
        let user = DeploymentUser {
            username: "indexer".to_string(),
            ..DeploymentUser::default()
        };
        let err = client
            .create_deployment_user("acct1", "ss123456", &user)
            .await
            .unwrap_err();
        match err {
            ApiError::Rejected(message) => assert_eq!(message, "user already exists"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delete_user_posts_the_username() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/account/acct1/deployment/ss123456/solr/auth/delete-user/",
            ))
            .and(body_json(json!({"username": "indexer"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": "true", "message": ""})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::with_token(server.uri(), "sstoken");
        client
            .delete_deployment_user("acct1", "ss123456", "indexer")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_user_rejection_surfaces_the_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/account/acct1/deployment/ss123456/solr/auth/delete-user/",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": "false",
                "message": "no such user"
            })))
            .mount(&server)
            .await;

        let client = ApiClient::with_token(server.uri(), "sstoken");
        let err = client
            .delete_deployment_user("acct1", "ss123456", "ghost")
            .await
            .unwrap_err();
        match err {
            ApiError::Rejected(message) => assert_eq!(message, "no such user"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn user_serializes_with_capitalized_keys() {
        let user = DeploymentUser {
            uid: "ss123456".to_string(),
            username: "indexer".to_string(),
            password: "pw1".to_string(),
            role: "rw".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""UID":"ss123456""#));
        assert!(json.contains(r#""Username":"indexer""#));
        assert!(json.contains(r#""Roles":"rw""#));
    }
}
