use std::time::Duration;

/// Server configuration loaded from environment variables.
///
/// All fields except the upstream token have sensible defaults suitable
/// for local development. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upstream Brawl Stars API settings (base URL, token, timeout).
    pub upstream: UpstreamConfig,
}

/// Connection settings for the upstream Brawl Stars API.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the upstream API, without a trailing slash.
    pub base_url: String,
    /// Bearer token attached to every outbound request.
    pub token: String,
    /// Outbound request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

/// Default upstream base URL.
const DEFAULT_BASE_URL: &str = "https://api.brawlstars.com/v1";
/// Default outbound request timeout in seconds.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `8000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream = UpstreamConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upstream,
        }
    }
}

impl UpstreamConfig {
    /// Load upstream settings from environment variables.
    ///
    /// | Env Var                  | Required | Default                         |
    /// |--------------------------|----------|---------------------------------|
    /// | `BRAWL_API_TOKEN`        | **yes**  | --                              |
    /// | `BRAWL_API_BASE_URL`     | no       | `https://api.brawlstars.com/v1` |
    /// | `BRAWL_API_TIMEOUT_SECS` | no       | `10`                            |
    ///
    /// # Panics
    ///
    /// Panics if `BRAWL_API_TOKEN` is not set or is empty. The token is a
    /// secret and is only ever supplied through the environment.
    pub fn from_env() -> Self {
        let token = std::env::var("BRAWL_API_TOKEN")
            .expect("BRAWL_API_TOKEN must be set in the environment");
        assert!(!token.is_empty(), "BRAWL_API_TOKEN must not be empty");

        let base_url =
            std::env::var("BRAWL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs: u64 = std::env::var("BRAWL_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
            .parse()
            .expect("BRAWL_API_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            token,
            timeout_secs,
        }
    }

    /// Outbound request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
