//! Domain types for Cardano entity links and lookups.
//!
//! # Module Organization
//!
//! - [`error`] - Custom error types
//! - [`network`] - Network selection (Mainnet, Testnet)
//! - [`entity`] - Entity kinds and value helpers
//! - [`explorer`] - Explorer providers and URL synthesis
//! - [`outcome`] - Lookup, submission and confirmation outcomes
//! - [`content`] - Entity payloads returned by the backend

// ============================================================================
// Module Declarations
// ============================================================================

pub mod content;
pub mod entity;
pub mod error;
pub mod explorer;
pub mod network;
pub mod outcome;

// ============================================================================
// Re-exports
// ============================================================================

pub use content::{
    AddressContent, Amount, AssetContent, PolicyAsset, PolicyContent, TransactionContent,
    format_block_time,
};
pub use entity::{EntityType, compose_asset_id, non_blank};
pub use error::CardanoError;
pub use explorer::ExplorerProvider;
pub use network::NetworkType;
pub use outcome::{ConfirmationResult, LookupOutcome, SubmissionResult};
