//! Waiting for a submitted transaction to show up on-chain.
//!
//! The waiter is a small state machine:
//!
//! ```text
//! Submitted --(failed submission)--> SubmissionFailed
//! Submitted --> Polling{0} --(found)--> Confirmed
//!               Polling{n} --(absent or transport error, sleep)--> Polling{n+1}
//!               Polling{max_attempts} --> TimedOut
//! ```
//!
//! Sleeping goes through [`Sleeper`] so tests can simulate time, and every
//! wait can be cut short by a caller-supplied cancellation future.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

use crate::client::ChainBackend;
use crate::domain::{ConfirmationResult, LookupOutcome, SubmissionResult, non_blank};

// ============================================================================
// Constants
// ============================================================================

/// Pause between two status polls.
pub const DEFAULT_WAIT_INTERVAL: Duration = Duration::from_millis(2000);

/// Number of polls before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;

// ============================================================================
// Poll Policy
// ============================================================================

/// Cadence and budget of a confirmation wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_WAIT_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PollPolicy {
    /// Worst-case time spent sleeping before `TimedOut`, or `None` when it
    /// does not fit in a [`Duration`].
    #[must_use]
    pub fn budget(&self) -> Option<Duration> {
        self.interval.checked_mul(self.max_attempts)
    }
}

// ============================================================================
// Sleeper
// ============================================================================

/// Suspends the waiter between polls.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real-time sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

// ============================================================================
// Waiter
// ============================================================================

#[derive(Debug)]
enum WaitState<'a> {
    Submitted(&'a SubmissionResult),
    Polling { tx_id: &'a str, attempt: u32 },
    Finished(ConfirmationResult),
}

/// Polls the backend until a transaction is confirmed or the budget is spent.
pub struct ConfirmationWaiter<'a> {
    backend: &'a dyn ChainBackend,
    sleeper: &'a dyn Sleeper,
    policy: PollPolicy,
}

impl<'a> ConfirmationWaiter<'a> {
    #[must_use]
    pub fn new(
        backend: &'a dyn ChainBackend,
        sleeper: &'a dyn Sleeper,
        policy: PollPolicy,
    ) -> Self {
        Self {
            backend,
            sleeper,
            policy,
        }
    }

    /// Waits for the transaction behind a submission result.
    pub async fn wait_for_transaction(&self, submission: &SubmissionResult) -> ConfirmationResult {
        self.wait_until_cancelled(submission, std::future::pending())
            .await
    }

    /// Waits for a bare transaction id. A blank id counts as a failed
    /// submission.
    pub async fn wait_for_transaction_id(&self, tx_id: &str) -> ConfirmationResult {
        self.wait_for_transaction(&SubmissionResult::submitted(tx_id))
            .await
    }

    /// Like [`wait_for_transaction`](Self::wait_for_transaction), but stops
    /// with [`ConfirmationResult::Cancelled`] once `cancel` resolves.
    ///
    /// `cancel` is only observed while sleeping between polls; an in-flight
    /// lookup always completes.
    pub async fn wait_until_cancelled(
        &self,
        submission: &SubmissionResult,
        cancel: impl Future<Output = ()>,
    ) -> ConfirmationResult {
        tokio::pin!(cancel);

        let mut state = WaitState::Submitted(submission);
        loop {
            state = match state {
                WaitState::Submitted(submission) => Self::start(submission),
                WaitState::Polling { attempt, .. } if attempt >= self.policy.max_attempts => {
                    tracing::warn!(
                        attempts = attempt,
                        "Transaction not confirmed within the poll budget"
                    );
                    WaitState::Finished(ConfirmationResult::TimedOut)
                }
                WaitState::Polling { tx_id, attempt } => {
                    match self.poll(tx_id, attempt).await {
                        Some(result) => WaitState::Finished(result),
                        None => {
                            tokio::select! {
                                () = self.sleeper.sleep(self.policy.interval) => WaitState::Polling {
                                    tx_id,
                                    attempt: attempt + 1,
                                },
                                () = &mut cancel => {
                                    tracing::info!(tx_id, attempt, "Confirmation wait cancelled");
                                    WaitState::Finished(ConfirmationResult::Cancelled)
                                }
                            }
                        }
                    }
                }
                WaitState::Finished(result) => return result,
            };
        }
    }

    fn start(submission: &SubmissionResult) -> WaitState<'_> {
        match submission {
            SubmissionResult::Submitted { tx_id } => match non_blank(Some(tx_id.as_str())) {
                Some(tx_id) => WaitState::Polling { tx_id, attempt: 0 },
                None => {
                    tracing::warn!("Submission returned an empty transaction id");
                    WaitState::Finished(ConfirmationResult::SubmissionFailed)
                }
            },
            SubmissionResult::Failed { reason } => {
                tracing::warn!(reason = %reason, "Transaction submission failed, not polling");
                WaitState::Finished(ConfirmationResult::SubmissionFailed)
            }
        }
    }

    /// One status query. `Some` ends the wait.
    async fn poll(&self, tx_id: &str, attempt: u32) -> Option<ConfirmationResult> {
        match self.backend.get_transaction_status(tx_id).await {
            LookupOutcome::Found(content) => {
                tracing::info!(
                    tx_id,
                    block_height = content.block_height,
                    attempt = attempt + 1,
                    "Transaction confirmed"
                );
                Some(ConfirmationResult::Confirmed(Box::new(content)))
            }
            LookupOutcome::NotFound => {
                tracing::debug!(tx_id, attempt = attempt + 1, "Waiting for transaction to be included");
                None
            }
            LookupOutcome::TransportError(detail) => {
                tracing::error!(
                    tx_id,
                    attempt = attempt + 1,
                    detail = %detail,
                    "Transaction status poll failed"
                );
                None
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
