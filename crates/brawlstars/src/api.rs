//! REST API client for the Brawl Stars HTTP endpoints.
//!
//! Wraps the upstream statistics API (player lookup, club lookup, brawler
//! catalog) using [`reqwest`]. Each method issues exactly one outbound GET;
//! there are no retries and no caching.

use std::time::Duration;

use brawlgate_core::tag::Tag;

/// HTTP client for the Brawl Stars API.
///
/// Holds the connection pool, base URL, and bearer token. Immutable after
/// construction; share it behind an `Arc`.
pub struct BrawlStarsApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Errors from the Brawl Stars REST layer.
#[derive(Debug, thiserror::Error)]
pub enum BrawlStarsApiError {
    /// The requested player or club does not exist upstream (404).
    #[error("resource not found upstream")]
    NotFound,

    /// The upstream returned a non-2xx status other than 404.
    #[error("Brawl Stars API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The HTTP exchange itself failed (connection error, DNS, TLS,
    /// timeout, or a body that is not valid JSON).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl BrawlStarsApi {
    /// Create a new API client.
    ///
    /// * `base_url` - upstream base, e.g. `https://api.brawlstars.com/v1`.
    /// * `token`    - bearer token sent in the `Authorization` header.
    /// * `timeout`  - per-request timeout applied to every outbound call.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed (TLS
    /// backend failure at startup).
    pub fn new(base_url: String, token: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self::with_client(client, base_url, token)
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling or test-specific settings).
    pub fn with_client(client: reqwest::Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    /// Fetch a player profile by tag.
    ///
    /// Sends `GET {base}/players/%23{TAG}` and returns the payload
    /// verbatim as parsed JSON.
    pub async fn get_player(&self, tag: &Tag) -> Result<serde_json::Value, BrawlStarsApiError> {
        self.fetch(&format!("players/%23{tag}")).await
    }

    /// Fetch a club profile by tag.
    ///
    /// Sends `GET {base}/clubs/%23{TAG}` and returns the payload verbatim
    /// as parsed JSON.
    pub async fn get_club(&self, tag: &Tag) -> Result<serde_json::Value, BrawlStarsApiError> {
        self.fetch(&format!("clubs/%23{tag}")).await
    }

    /// Fetch the catalog of playable brawlers.
    ///
    /// Sends `GET {base}/brawlers`.
    pub async fn get_brawlers(&self) -> Result<serde_json::Value, BrawlStarsApiError> {
        self.fetch("brawlers").await
    }

    // ---- private helpers ----

    /// Issue one GET against the upstream and translate the result.
    async fn fetch(&self, path: &str) -> Result<serde_json::Value, BrawlStarsApiError> {
        tracing::debug!(path, "requesting upstream resource");

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success; maps 404 to [`BrawlStarsApiError::NotFound`]
    /// and any other non-2xx status to [`BrawlStarsApiError::Api`] carrying
    /// the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, BrawlStarsApiError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BrawlStarsApiError::NotFound);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), %body, "upstream request failed");
            return Err(BrawlStarsApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body.
    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<serde_json::Value, BrawlStarsApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }
}
