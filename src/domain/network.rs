//! Network configuration for Cardano networks.
//!
//! This module defines the supported Cardano networks and the backend
//! endpoints associated with each of them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::CardanoError;

// ============================================================================
// Network Configuration
// ============================================================================

/// Cardano network variants.
///
/// Selects both the explorer URL template set and the backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Cardano Mainnet - the production network.
    #[default]
    Mainnet,
    /// Cardano public testnet.
    Testnet,
}

impl NetworkType {
    /// All networks, in display order.
    pub const ALL: [Self; 2] = [Self::Mainnet, Self::Testnet];

    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Testnet => "Testnet",
        }
    }

    /// Returns the default Blockfrost API base URL for this network.
    #[must_use]
    pub const fn blockfrost_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://cardano-mainnet.blockfrost.io/api/v0",
            Self::Testnet => "https://cardano-preprod.blockfrost.io/api/v0",
        }
    }

    /// Whether this is a test network.
    #[must_use]
    pub const fn is_test(&self) -> bool {
        matches!(self, Self::Testnet)
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = CardanoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(CardanoError::invalid_input(format!(
                "unknown network '{other}', expected 'mainnet' or 'testnet'"
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
