//! On-chain entity kinds and value helpers.

use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::CardanoError;

// ============================================================================
// Entity Type
// ============================================================================

/// The kind of on-chain entity a raw value refers to.
///
/// Decides both which backend lookup is used to check existence and which
/// explorer page a link points at. Serialized with the keys used by the
/// form configuration (`transactionId`, `accountAddress`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    /// A transaction hash.
    #[default]
    TransactionId,
    /// A bech32 payment or stake address.
    AccountAddress,
    /// A minting policy id (56 hex chars).
    TokenPolicy,
    /// A policy id concatenated with a hex-encoded asset name.
    AssetId,
}

impl EntityType {
    /// All entity types.
    pub const ALL: [Self; 4] = [
        Self::TransactionId,
        Self::AccountAddress,
        Self::TokenPolicy,
        Self::AssetId,
    ];

    /// Configuration key for this entity type.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::TransactionId => "transactionId",
            Self::AccountAddress => "accountAddress",
            Self::TokenPolicy => "tokenPolicy",
            Self::AssetId => "assetId",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EntityType {
    type Err = CardanoError;

    /// Accepts the configuration keys as well as short aliases
    /// (`tx`, `address`, `policy`, `asset`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "transactionId" | "transaction" | "tx" => Ok(Self::TransactionId),
            "accountAddress" | "address" | "addr" => Ok(Self::AccountAddress),
            "tokenPolicy" | "policy" => Ok(Self::TokenPolicy),
            "assetId" | "asset" => Ok(Self::AssetId),
            other => Err(CardanoError::invalid_input(format!(
                "unknown value type '{other}'"
            ))),
        }
    }
}

// ============================================================================
// Value Helpers
// ============================================================================

/// Returns the trimmed value, or `None` when it is absent or blank.
///
/// Blank values never reach the backend or the URL builder.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Builds an asset id from a policy id and a human-readable asset name.
///
/// The asset id is the policy id followed by the lowercase hex encoding of
/// the UTF-8 asset name.
#[must_use]
pub fn compose_asset_id(policy_id: &str, asset_name: &str) -> String {
    format!(
        "{}{}",
        policy_id.trim(),
        HEXLOWER.encode(asset_name.as_bytes())
    )
}

// ============================================================================
// Tests
// ============================================================================
