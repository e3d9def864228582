//! Lookup capabilities the core needs from a chain-indexing service.

use async_trait::async_trait;

use crate::domain::{
    AddressContent, AssetContent, LookupOutcome, PolicyContent, TransactionContent,
};

/// Backend lookup capabilities, passed explicitly to every component that
/// talks to the chain.
///
/// Implementations report domain absence as [`LookupOutcome::NotFound`] and
/// reserve [`LookupOutcome::TransportError`] for failures of the lookup
/// mechanism itself. They must be safe to call concurrently.
#[async_trait]
pub trait ChainBackend: Send + Sync {
    /// Look up a transaction by hash.
    async fn lookup_transaction(&self, id: &str) -> LookupOutcome<TransactionContent>;

    /// Look up an address.
    async fn lookup_address(&self, address: &str) -> LookupOutcome<AddressContent>;

    /// Look up a minting policy by id.
    async fn lookup_policy(&self, policy_id: &str) -> LookupOutcome<PolicyContent>;

    /// Look up a native asset by id (policy id + hex asset name).
    async fn lookup_asset(&self, asset_id: &str) -> LookupOutcome<AssetContent>;

    /// Status check used while waiting for confirmation.
    async fn get_transaction_status(&self, id: &str) -> LookupOutcome<TransactionContent> {
        self.lookup_transaction(id).await
    }
}
