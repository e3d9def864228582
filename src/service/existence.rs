//! On-chain existence checks for user-supplied values.
//!
//! The value being checked is free-form input, so "it does not exist" is an
//! ordinary answer and stays out of the error log. Only a broken lookup
//! (transport, auth, decoding) is reported at error level.

use crate::client::ChainBackend;
use crate::domain::{EntityType, LookupOutcome, non_blank};

/// Looks the value up with the capability matching `entity` and returns the
/// un-collapsed outcome.
///
/// A blank value short-circuits to `NotFound` without touching the backend.
pub async fn check(backend: &dyn ChainBackend, value: &str, entity: EntityType) -> LookupOutcome {
    let Some(value) = non_blank(Some(value)) else {
        return LookupOutcome::NotFound;
    };

    let outcome = match entity {
        EntityType::TransactionId => backend.lookup_transaction(value).await.discard(),
        EntityType::AccountAddress => backend.lookup_address(value).await.discard(),
        EntityType::TokenPolicy => backend.lookup_policy(value).await.discard(),
        EntityType::AssetId => backend.lookup_asset(value).await.discard(),
    };

    match &outcome {
        LookupOutcome::TransportError(detail) => {
            tracing::error!(
                entity = %entity,
                value,
                detail = %detail,
                "Error retrieving on-chain data from backend"
            );
        }
        LookupOutcome::NotFound => {
            tracing::debug!(entity = %entity, value, "No matching on-chain entity");
        }
        LookupOutcome::Found(()) => {}
    }

    outcome
}

/// `true` iff the backend reports the entity present.
///
/// Transport failures are logged and read as `false`.
pub async fn exists(backend: &dyn ChainBackend, value: &str, entity: EntityType) -> bool {
    check(backend, value, entity).await.is_found()
}

// ============================================================================
// Tests
// ============================================================================
