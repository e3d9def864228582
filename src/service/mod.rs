//! The boundary exposed to the form/UI layer.
//!
//! [`CardanoLink`] bundles the backend capabilities with the configured
//! network and explorer, and exposes the three operations callers need:
//! explorer links, existence checks and confirmation waits. None of them
//! fail; every problem is folded into the returned value.

use std::future::Future;
use std::sync::Arc;

use crate::client::{self, ChainBackend};
use crate::config::Settings;
use crate::domain::{
    CardanoError, ConfirmationResult, EntityType, ExplorerProvider, LookupOutcome, NetworkType,
    SubmissionResult, explorer,
};

pub mod confirmation;
pub mod existence;

pub use confirmation::{ConfirmationWaiter, PollPolicy, Sleeper, TokioSleeper};

/// Entry point for resolving, checking and confirming Cardano entities.
#[derive(Clone)]
pub struct CardanoLink {
    backend: Arc<dyn ChainBackend>,
    sleeper: Arc<dyn Sleeper>,
    network: NetworkType,
    explorer: ExplorerProvider,
    poll_policy: PollPolicy,
}

impl std::fmt::Debug for CardanoLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardanoLink")
            .field("network", &self.network)
            .field("explorer", &self.explorer)
            .field("poll_policy", &self.poll_policy)
            .finish_non_exhaustive()
    }
}

impl CardanoLink {
    /// Wraps an existing backend.
    #[must_use]
    pub fn new(
        backend: Arc<dyn ChainBackend>,
        network: NetworkType,
        explorer: ExplorerProvider,
    ) -> Self {
        Self {
            backend,
            sleeper: Arc::new(TokioSleeper),
            network,
            explorer,
            poll_policy: PollPolicy::default(),
        }
    }

    /// Connects to the backend described by `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend configuration is incomplete.
    pub fn connect(settings: &Settings) -> Result<Self, CardanoError> {
        let backend = client::connect(settings.network, &settings.backend)?;
        Ok(Self::new(backend, settings.network, settings.explorer))
    }

    #[must_use]
    pub fn with_poll_policy(mut self, poll_policy: PollPolicy) -> Self {
        self.poll_policy = poll_policy;
        self
    }

    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    #[must_use]
    pub fn network(&self) -> NetworkType {
        self.network
    }

    #[must_use]
    pub fn explorer(&self) -> ExplorerProvider {
        self.explorer
    }

    /// Explorer URL for `value` on the configured network and explorer, or
    /// an empty string for a blank value.
    #[must_use]
    pub fn resolve_explorer_url(&self, value: &str, entity: EntityType) -> String {
        explorer::resolve(value, entity, self.network, self.explorer)
    }

    /// Whether `value` exists on-chain as an entity of type `entity`.
    pub async fn check_entity_exists(&self, value: &str, entity: EntityType) -> bool {
        existence::exists(self.backend.as_ref(), value, entity).await
    }

    /// Like [`check_entity_exists`](Self::check_entity_exists), keeping the
    /// difference between "absent" and "could not tell".
    pub async fn check_entity(&self, value: &str, entity: EntityType) -> LookupOutcome {
        existence::check(self.backend.as_ref(), value, entity).await
    }

    /// Blocks until the submitted transaction is confirmed, the poll budget
    /// runs out, or the submission turns out to have failed.
    pub async fn await_confirmation(&self, submission: &SubmissionResult) -> ConfirmationResult {
        self.waiter().wait_for_transaction(submission).await
    }

    /// [`await_confirmation`](Self::await_confirmation) with an abort
    /// signal; pass e.g. `tokio::signal::ctrl_c()` or a deadline sleep.
    pub async fn await_confirmation_or_cancel(
        &self,
        submission: &SubmissionResult,
        cancel: impl Future<Output = ()>,
    ) -> ConfirmationResult {
        self.waiter().wait_until_cancelled(submission, cancel).await
    }

    fn waiter(&self) -> ConfirmationWaiter<'_> {
        ConfirmationWaiter::new(
            self.backend.as_ref(),
            self.sleeper.as_ref(),
            self.poll_policy,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
