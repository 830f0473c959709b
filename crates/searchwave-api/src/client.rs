//! HTTP transport and authentication for the Searchwave API.
//!
//! This module provides [`ApiClient`], which performs one authenticated
//! request/response exchange per call: it attaches the JSON content type and,
//! when a token is held, the `Authorization: Token <token>` header, then
//! classifies the response by HTTP status. Body decoding happens above the
//! transport so malformed JSON is reported distinctly from network failures.

use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Request payload for the token sign-in call.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Response from the token sign-in call.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// Confirmation envelope returned by deletion endpoints.
///
/// The backend encodes `success` as the literal strings `"true"` / `"false"`,
/// not a JSON boolean. The field is kept as a string and compared exactly;
/// coercing it to `bool` would accept a wire format the backend never sends
/// and silently misread the one it does.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteEnvelope {
    /// `"true"` when the operation was accepted.
    pub success: String,

    /// Human-readable detail, populated on rejection.
    #[serde(default)]
    pub message: String,
}

impl DeleteEnvelope {
    /// True only for the exact string `"true"`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success == "true"
    }

    /// Convert the envelope into a result, rejecting with its message.
    pub(crate) fn into_result(self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

/// Client for the Searchwave deployment API.
///
/// Holds the base URL and, once signed in, the bearer token. Both are set at
/// construction and never mutated, so a client can be shared freely across
/// tasks.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client that sends no bearer token.
    ///
    /// List and get endpoints accept unauthenticated requests; mutation
    /// endpoints will answer 401.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created.
    #[must_use]
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self {
            http: Self::http_client(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Create a client with a pre-obtained bearer token.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created.
    #[must_use]
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: Self::http_client(),
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    /// Sign in with the configured credentials and return a token-holding
    /// client.
    ///
    /// # Errors
    ///
    /// Returns an error if the sign-in call fails or its response cannot be
    /// decoded.
    pub async fn sign_in(config: &ApiConfig) -> Result<Self> {
        let client = Self::anonymous(config.base_url.clone());

        let request = TokenRequest {
            username: &config.username,
            password: &config.password,
        };
        let body = client
            .execute(client.http.post(config.token_url()).json(&request))
            .await?;
        let response: TokenResponse = serde_json::from_str(&body)?;

        tracing::debug!(base_url = %config.base_url, "signed in to Searchwave API");

        Ok(Self {
            token: Some(response.token),
            ..client
        })
    }

    /// Get the base URL of the API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn http_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("failed to create HTTP client")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Perform one request/response exchange.
    ///
    /// Bodies from 2xx responses are returned as text; anything else becomes
    /// [`ApiError::Remote`] carrying the status and body.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let mut request = request.header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("Token {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!(status = %status, "Searchwave API returned an error status");
            Err(ApiError::Remote {
                status: status.as_u16(),
                body,
            })
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.execute(self.http.get(self.url(path))).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let body = self
            .execute(self.http.post(self.url(path)).json(body))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.execute(self.http.delete(self.url(path))).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
