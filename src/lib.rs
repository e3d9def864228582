//! Cardano entity links, existence checks and confirmation polling.
//!
//! - [`domain`] - entity, network and explorer types, outcomes
//! - [`client`] - the backend capability trait and its Blockfrost client
//! - [`service`] - existence checker, confirmation waiter and the
//!   [`CardanoLink`] facade
//! - [`config`] - persisted settings

pub mod client;
pub mod config;
pub mod domain;
pub mod service;

#[cfg(test)]
mod test_utils;

pub use client::ChainBackend;
pub use domain::{
    ConfirmationResult, EntityType, ExplorerProvider, LookupOutcome, NetworkType,
    SubmissionResult,
};
pub use service::CardanoLink;
