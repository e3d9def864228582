//! Entity payloads returned by the chain-indexing backend.
//!
//! Field names follow the Blockfrost JSON schema so the structs deserialize
//! straight from response bodies. Quantities are lovelace/token amounts as
//! decimal strings, the way the API sends them.

use serde::{Deserialize, Serialize};

/// Formats a Unix timestamp (seconds) for display.
#[must_use]
pub fn format_block_time(timestamp_secs: i64) -> String {
    if timestamp_secs <= 0 {
        return "Timestamp not available".to_string();
    }

    match chrono::DateTime::from_timestamp(timestamp_secs, 0) {
        Some(datetime) => datetime.format("%a, %d %b %Y %H:%M:%S UTC").to_string(),
        None => "Timestamp not available".to_string(),
    }
}

/// A `(unit, quantity)` pair; `lovelace` or a policy+asset-name unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub unit: String,
    pub quantity: String,
}

/// A transaction as seen by the indexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionContent {
    /// Transaction hash.
    pub hash: String,
    /// Hash of the containing block.
    pub block: String,
    pub block_height: u64,
    /// Unix time of the containing block.
    pub block_time: i64,
    pub slot: u64,
    /// Position within the block.
    pub index: u32,
    #[serde(default)]
    pub output_amount: Vec<Amount>,
    /// Fee in lovelace.
    pub fees: String,
    pub size: u64,
    /// `false` when a Plutus script failed phase-2 validation.
    #[serde(default = "default_true")]
    pub valid_contract: bool,
}

impl TransactionContent {
    /// Human-readable block time.
    #[must_use]
    pub fn formatted_block_time(&self) -> String {
        format_block_time(self.block_time)
    }
}

fn default_true() -> bool {
    true
}

/// An address with its current balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressContent {
    pub address: String,
    #[serde(default)]
    pub amount: Vec<Amount>,
    pub stake_address: Option<String>,
    /// `byron` or `shelley`.
    #[serde(rename = "type")]
    pub era: String,
    #[serde(default)]
    pub script: bool,
}

/// One asset minted under a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAsset {
    pub asset: String,
    pub quantity: String,
}

/// A minting policy, known to exist because at least one asset was minted
/// under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyContent {
    pub policy_id: String,
    pub assets: Vec<PolicyAsset>,
}

/// A native asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetContent {
    /// Policy id concatenated with the hex asset name.
    pub asset: String,
    pub policy_id: String,
    /// Hex-encoded asset name.
    pub asset_name: Option<String>,
    /// CIP-14 fingerprint (`asset1...`).
    pub fingerprint: String,
    /// Current supply.
    pub quantity: String,
    pub initial_mint_tx_hash: String,
    #[serde(default)]
    pub mint_or_burn_count: u64,
}
