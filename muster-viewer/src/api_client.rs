use std::time::Duration;

use muster_model::{FormatError, User, users_from_value};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Failure classification for one directory fetch.
///
/// Closed enumeration; the renderer derives the user-facing message by
/// exhaustive match. Payloads are owned so the error can ride inside an
/// application message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The HTTP call itself failed: DNS, connect, timeout, or a non-success
    /// status.
    #[error("network error: {0}")]
    Transport(String),

    /// The response arrived but violates the structural contract.
    #[error("malformed directory payload: {0}")]
    Format(#[from] FormatError),

    /// Anything not recognized as transport- or format-level.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// Map a `reqwest` failure onto the closed taxonomy.
    ///
    /// A body that fails JSON decoding counts as a format failure, not a
    /// transport one: the request itself completed.
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Format(FormatError::Syntax(err.to_string()))
        } else if err.is_status()
            || err.is_timeout()
            || err.is_connect()
            || err.is_request()
            || err.is_redirect()
        {
            FetchError::Transport(err.to_string())
        } else {
            FetchError::Unexpected(err.to_string())
        }
    }
}

/// HTTP client for the directory server.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        log::info!("[ApiClient] Creating new API client with base URL: {base_url}");

        Self { client, base_url }
    }

    /// Full URL of the users endpoint.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url.trim_end_matches('/'))
    }

    /// Fetch and validate the user directory.
    ///
    /// One GET, no headers or query parameters. Every failure lands in
    /// exactly one [`FetchError`] kind; a partial list is never produced.
    pub async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let url = self.users_url();
        log::debug!("[ApiClient] GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;
        let response = response
            .error_for_status()
            .map_err(FetchError::from_reqwest)?;
        let payload: Value =
            response.json().await.map_err(FetchError::from_reqwest)?;

        let users = users_from_value(&payload)?;
        log::info!("[ApiClient] fetched {} users", users.len());
        Ok(users)
    }
}
