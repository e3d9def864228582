//! Blockfrost REST backend.
//!
//! Maps HTTP responses onto [`LookupOutcome`]: a 404 (and a 400, which the
//! API returns for malformed ids) means the entity is not there, anything
//! else that is not a success means the lookup itself is broken.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use super::backend::ChainBackend;
use super::http::{HttpClient, HttpConfig};
use crate::config::BackendConfig;
use crate::domain::{
    AddressContent, AssetContent, CardanoError, LookupOutcome, NetworkType, PolicyAsset,
    PolicyContent, TransactionContent,
};

// ============================================================================
// Status Classification
// ============================================================================

/// How a response status is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
    /// Body carries the entity.
    Success,
    /// The backend says there is no such entity.
    Absent,
    /// Auth, rate limiting, server errors and anything unexpected.
    Failure,
}

pub(crate) fn classify_status(status: StatusCode) -> StatusClass {
    if status.is_success() {
        StatusClass::Success
    } else if matches!(status, StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST) {
        StatusClass::Absent
    } else {
        StatusClass::Failure
    }
}

// ============================================================================
// Blockfrost Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct BlockfrostClient {
    http: HttpClient,
    base_url: Url,
    network: NetworkType,
}

impl BlockfrostClient {
    /// Creates a client for `network` from backend configuration.
    ///
    /// # Errors
    ///
    /// Returns `CardanoError::Config` if the project id is missing for the
    /// hosted API or the base URL is unusable, and
    /// `CardanoError::ClientInit` if the HTTP client cannot be built.
    pub fn new(network: NetworkType, config: &BackendConfig) -> Result<Self, CardanoError> {
        let base = config.base_url_for(network);
        let base_url = Url::parse(base)
            .map_err(|e| CardanoError::config(format!("invalid backend URL '{base}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CardanoError::config(format!(
                "backend URL '{base}' cannot carry a path"
            )));
        }

        let mut http_config = HttpConfig::with_timeout(config.timeout());
        match config.project_id() {
            Some(project_id) => http_config = http_config.project_id(project_id),
            None if !config.has_custom_base_url() => {
                return Err(CardanoError::config(format!(
                    "a Blockfrost project id is required for {network}"
                )));
            }
            None => {}
        }

        Ok(Self {
            http: HttpClient::with_config(http_config)?,
            base_url,
            network,
        })
    }

    #[must_use]
    pub fn network(&self) -> NetworkType {
        self.network
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one so
    /// free-form values cannot escape into another endpoint.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> LookupOutcome<T> {
        let path = url.path().to_string();
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => return LookupOutcome::transport(format!("request to {path} failed: {e}")),
        };

        let status = response.status();
        match classify_status(status) {
            StatusClass::Success => match response.json::<T>().await {
                Ok(value) => LookupOutcome::Found(value),
                Err(e) => LookupOutcome::transport(format!(
                    "failed to decode response from {path}: {e}"
                )),
            },
            StatusClass::Absent => {
                tracing::debug!(%status, path = %path, "Entity not found");
                LookupOutcome::NotFound
            }
            StatusClass::Failure => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                LookupOutcome::transport(format!("HTTP {status} from {path}: {body}"))
            }
        }
    }
}

#[async_trait]
impl ChainBackend for BlockfrostClient {
    async fn lookup_transaction(&self, id: &str) -> LookupOutcome<TransactionContent> {
        self.fetch(self.endpoint(&["txs", id])).await
    }

    async fn lookup_address(&self, address: &str) -> LookupOutcome<AddressContent> {
        self.fetch(self.endpoint(&["addresses", address])).await
    }

    async fn lookup_policy(&self, policy_id: &str) -> LookupOutcome<PolicyContent> {
        let mut url = self.endpoint(&["assets", "policy", policy_id]);
        url.query_pairs_mut().append_pair("count", "1");

        match self.fetch::<Vec<PolicyAsset>>(url).await {
            LookupOutcome::Found(assets) if assets.is_empty() => LookupOutcome::NotFound,
            outcome => outcome.map(|assets| PolicyContent {
                policy_id: policy_id.to_string(),
                assets,
            }),
        }
    }

    async fn lookup_asset(&self, asset_id: &str) -> LookupOutcome<AssetContent> {
        self.fetch(self.endpoint(&["assets", asset_id])).await
    }
}

// ============================================================================
// Tests
// ============================================================================
