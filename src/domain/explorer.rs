//! Explorer link synthesis.
//!
//! Every `(provider, entity, network)` combination maps to a URL template;
//! the tables below are exhaustive matches, so adding a variant to any of
//! the three enums fails to compile until every template is filled in.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::form_urlencoded;

use super::{CardanoError, EntityType, NetworkType, entity::non_blank};

// ============================================================================
// Explorer Provider
// ============================================================================

/// Block explorer websites a link can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerProvider {
    /// The official Cardano explorer. Takes the value as a query parameter.
    #[default]
    Native,
    /// cardanoscan.io
    CardanoScan,
    /// cexplorer.io
    CExplorer,
    /// adatools.io
    AdaTools,
}

/// How the value is attached to a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// `base` already ends with `?<param>=`.
    Query,
    /// `base` already ends with `/`.
    Path,
}

impl ExplorerProvider {
    /// All providers.
    pub const ALL: [Self; 4] = [
        Self::Native,
        Self::CardanoScan,
        Self::CExplorer,
        Self::AdaTools,
    ];

    /// Configuration key for this provider.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::CardanoScan => "cardanoscan",
            Self::CExplorer => "cexplorer",
            Self::AdaTools => "adatools",
        }
    }

    const fn placement(&self) -> Placement {
        match self {
            Self::Native => Placement::Query,
            Self::CardanoScan | Self::CExplorer | Self::AdaTools => Placement::Path,
        }
    }

    /// Site root for the given network.
    #[must_use]
    pub const fn host(&self, network: NetworkType) -> &'static str {
        match (self, network) {
            (Self::Native, NetworkType::Mainnet) => "https://explorer.cardano.org/en",
            (Self::Native, NetworkType::Testnet) => {
                "https://explorer.cardano-testnet.iohkdev.io/en"
            }
            (Self::CardanoScan, NetworkType::Mainnet) => "https://cardanoscan.io",
            (Self::CardanoScan, NetworkType::Testnet) => "https://testnet.cardanoscan.io",
            (Self::CExplorer, NetworkType::Mainnet) => "https://cexplorer.io",
            (Self::CExplorer, NetworkType::Testnet) => "https://testnet.cexplorer.io",
            (Self::AdaTools, NetworkType::Mainnet) => "https://adatools.io",
            (Self::AdaTools, NetworkType::Testnet) => "https://testnet.adatools.io",
        }
    }

    /// Page path (including the trailing `/` or `?param=`) for an entity.
    const fn page(&self, entity: EntityType) -> &'static str {
        match (self, entity) {
            (Self::Native, EntityType::TransactionId) => "/transaction?id=",
            (Self::Native, EntityType::AccountAddress) => "/address?address=",
            (Self::Native, EntityType::TokenPolicy) => "/token-policy?id=",
            (Self::Native, EntityType::AssetId) => "/token?id=",

            (Self::CardanoScan, EntityType::TransactionId) => "/transaction/",
            (Self::CardanoScan, EntityType::AccountAddress) => "/address/",
            (Self::CardanoScan, EntityType::TokenPolicy) => "/tokenPolicy/",
            (Self::CardanoScan, EntityType::AssetId) => "/token/",

            (Self::CExplorer, EntityType::TransactionId) => "/tx/",
            (Self::CExplorer, EntityType::AccountAddress) => "/address/",
            (Self::CExplorer, EntityType::TokenPolicy) => "/policy/",
            (Self::CExplorer, EntityType::AssetId) => "/asset/",

            (Self::AdaTools, EntityType::TransactionId) => "/transactions/",
            (Self::AdaTools, EntityType::AccountAddress) => "/addresses/",
            (Self::AdaTools, EntityType::TokenPolicy) => "/policies/",
            (Self::AdaTools, EntityType::AssetId) => "/tokens/",
        }
    }

    /// The URL prefix the value is appended to.
    #[must_use]
    pub fn template(&self, entity: EntityType, network: NetworkType) -> String {
        format!("{}{}", self.host(network), self.page(entity))
    }
}

impl std::fmt::Display for ExplorerProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExplorerProvider {
    type Err = CardanoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "cardanoscan" => Ok(Self::CardanoScan),
            "cexplorer" => Ok(Self::CExplorer),
            "adatools" => Ok(Self::AdaTools),
            other => Err(CardanoError::invalid_input(format!(
                "unknown explorer '{other}'"
            ))),
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Builds the explorer URL for a value.
///
/// Returns an empty string for a blank value so callers can simply skip
/// rendering a link. Never touches the network. Query-parameter values are
/// form-encoded so the parameter decodes back to the value.
#[must_use]
pub fn resolve(
    value: &str,
    entity: EntityType,
    network: NetworkType,
    provider: ExplorerProvider,
) -> String {
    let Some(value) = non_blank(Some(value)) else {
        return String::new();
    };

    let mut url = provider.template(entity, network);
    match provider.placement() {
        Placement::Query => {
            debug_assert!(url.ends_with('='));
            url.extend(form_urlencoded::byte_serialize(value.as_bytes()));
        }
        Placement::Path => {
            debug_assert!(url.ends_with('/'));
            url.push_str(value);
        }
    }
    url
}

// ============================================================================
// Tests
// ============================================================================
