//! Client configuration.
//!
//! The configuration is immutable once constructed and is passed explicitly
//! to [`crate::ApiClient::sign_in`]; there is no ambient global state.

use serde::Deserialize;

/// Default Searchwave API base URL.
pub const DEFAULT_BASE_URL: &str = "https://app.searchwave.io/api/rest/v2";

/// Configuration for the API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, without a trailing slash.
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,

    /// Account username used for the sign-in call.
    pub username: String,

    /// Account password used for the sign-in call.
    pub password: String,
}

impl ApiConfig {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    /// Create a configuration against the default host.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create a configuration against a custom host.
    #[must_use]
    pub fn with_base_url(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Get the token sign-in endpoint URL.
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}/obtain-auth-token/", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host() {
        let config = ApiConfig::new("user", "pass");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.token_url(),
            "https://app.searchwave.io/api/rest/v2/obtain-auth-token/"
        );
    }

    #[test]
    fn custom_host() {
        let config = ApiConfig::with_base_url("http://localhost:9090", "user", "pass");
        assert_eq!(config.token_url(), "http://localhost:9090/obtain-auth-token/");
    }

    #[test]
    fn deserializes_with_default_host() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"username": "u", "password": "p"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
