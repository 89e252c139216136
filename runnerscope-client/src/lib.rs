//! Runnerscope HTTP Client
//!
//! A small, type-safe client for the runner endpoints of the GitHub REST API.
//!
//! # Example
//!
//! ```no_run
//! use runnerscope_client::GithubClient;
//!
//! # async fn example() -> runnerscope_client::Result<()> {
//! let client = GithubClient::new("ghp_example");
//! let groups = client.list_runner_groups("octo-org").await?;
//!
//! for group in groups.default_groups() {
//!     let runners = client.list_runners(&group.runners_url).await?;
//!     println!("{}: {} runners", group.name, runners.runners.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
mod runners;

pub use error::{ClientError, Result};

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Public GitHub REST API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version pinned on every request
pub const API_VERSION: &str = "2022-11-28";

/// `User-Agent` used unless overridden; the API rejects requests without one
pub const DEFAULT_USER_AGENT: &str = concat!("runnerscope/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the GitHub REST API
///
/// Every request is authenticated with the bearer token given at
/// construction time.
#[derive(Clone)]
pub struct GithubClient {
    /// Base URL of the API (e.g., "https://api.github.com")
    base_url: String,
    /// Bearer credential
    token: String,
    /// Value of the `User-Agent` header
    user_agent: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl GithubClient {
    /// Create a client for the public API
    ///
    /// # Arguments
    /// * `token` - Bearer credential used for every request
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_API_URL, token, Client::new())
    }

    /// Create a client with a custom base URL and HTTP client
    ///
    /// This allows you to target GitHub Enterprise Server and to configure
    /// timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use runnerscope_client::GithubClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = GithubClient::with_client("https://ghe.example.com/api/v3", "token", http_client);
    /// assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");
    /// ```
    pub fn with_client(base_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            client,
        }
    }

    /// Override the `User-Agent` sent with every request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a URL returned by the API or a base-relative path
    fn resolve(&self, url: &str) -> Result<String> {
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(url.to_string())
        } else if url.starts_with('/') {
            Ok(format!("{}{}", self.base_url, url))
        } else {
            Err(ClientError::InvalidRequest(format!(
                "Unsupported URL: '{}'",
                url
            )))
        }
    }

    /// Start an authenticated GET request
    fn get(&self, url: &str) -> Result<RequestBuilder> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ClientError::InvalidRequest("Token is not a valid header value".into()))?;
        bearer.set_sensitive(true);
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| ClientError::InvalidRequest(format!("Invalid user agent: {}", e)))?;

        Ok(self
            .client
            .get(url)
            .header(AUTHORIZATION, bearer)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, user_agent))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_body(status.as_u16(), &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
