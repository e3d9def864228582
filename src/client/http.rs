//! HTTP client abstraction for chain-indexer API requests.

use reqwest::Client;
use std::time::Duration;

use crate::domain::CardanoError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the Blockfrost project id
pub const PROJECT_ID_HEADER: &str = "project_id";

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// API key sent with every request, if any
    pub project_id: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            project_id: None,
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Attach an API key
    #[must_use]
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `CardanoError::ClientInit` if the underlying client cannot be
    /// built (e.g., TLS backend unavailable).
    pub fn with_config(config: HttpConfig) -> Result<Self, CardanoError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout)
            .build()
            .map_err(|e| CardanoError::client_init(e.to_string()))?;

        Ok(Self { inner, config })
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a GET request with standard headers
    pub fn get(&self, url: reqwest::Url) -> reqwest::RequestBuilder {
        let mut request = self.inner.get(url).header("accept", "application/json");

        if let Some(project_id) = &self.config.project_id {
            request = request.header(PROJECT_ID_HEADER, project_id);
        }

        request
    }
}
