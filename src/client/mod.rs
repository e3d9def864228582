//! Backend clients for Cardano chain-indexing services.
//!
//! This module provides:
//! - [`ChainBackend`] - the lookup capabilities the core depends on
//! - [`BlockfrostClient`] - a Blockfrost REST implementation of it
//! - [`connect`] - builds the backend for a configured network
//!
//! # Example
//!
//! ```ignore
//! use cardano_link::client;
//! use cardano_link::config::Settings;
//!
//! let settings = Settings::load();
//! let backend = client::connect(settings.network, &settings.backend)?;
//! let outcome = backend.lookup_transaction("1e04...").await;
//! ```

use std::sync::Arc;

use crate::config::BackendConfig;
use crate::domain::{CardanoError, NetworkType};

pub mod backend;
pub mod blockfrost;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use backend::ChainBackend;
pub use blockfrost::BlockfrostClient;
pub use http::{HttpClient, HttpConfig};

/// Builds the capability bundle for `network`.
///
/// # Errors
///
/// Returns an error if the backend configuration is incomplete or the HTTP
/// client cannot be initialized.
pub fn connect(
    network: NetworkType,
    config: &BackendConfig,
) -> Result<Arc<dyn ChainBackend>, CardanoError> {
    let client = BlockfrostClient::new(network, config)?;
    tracing::debug!(
        network = %network,
        base_url = %client.base_url(),
        "Connected chain backend"
    );
    Ok(Arc::new(client))
}
