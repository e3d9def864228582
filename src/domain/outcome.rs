//! Typed outcomes of backend lookups and confirmation waits.
//!
//! Nothing in the core fails across its public boundary; every failure mode
//! ends up as one of these variants.

use serde::{Deserialize, Serialize};

use super::TransactionContent;

// ============================================================================
// Lookup Outcome
// ============================================================================

/// Result of a single backend lookup.
///
/// `NotFound` means the backend affirmatively reported the entity absent;
/// `TransportError` means presence could not be determined at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<T = ()> {
    /// The entity exists.
    Found(T),
    /// The backend reported no such entity.
    NotFound,
    /// Network, protocol, auth or decoding failure.
    TransportError(String),
}

impl<T> LookupOutcome<T> {
    /// Creates a transport error from anything displayable.
    #[must_use]
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        Self::TransportError(detail.to_string())
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }

    /// Maps the found payload, keeping the other variants.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LookupOutcome<U> {
        match self {
            Self::Found(value) => LookupOutcome::Found(f(value)),
            Self::NotFound => LookupOutcome::NotFound,
            Self::TransportError(detail) => LookupOutcome::TransportError(detail),
        }
    }

    /// Drops the payload.
    pub fn discard(self) -> LookupOutcome {
        self.map(|_| ())
    }

    /// Returns the found payload, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::TransportError(_) => None,
        }
    }
}

// ============================================================================
// Submission
// ============================================================================

/// Result of an upstream transaction submission, as handed to the
/// confirmation waiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionResult {
    /// The backend accepted the transaction.
    Submitted {
        /// Hash of the submitted transaction.
        tx_id: String,
    },
    /// The submission itself failed.
    Failed {
        /// Error reported by the submitting client.
        reason: String,
    },
}

impl SubmissionResult {
    /// Successful submission of `tx_id`.
    #[must_use]
    pub fn submitted(tx_id: impl Into<String>) -> Self {
        Self::Submitted {
            tx_id: tx_id.into(),
        }
    }

    /// Failed submission.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Confirmation Result
// ============================================================================

/// Terminal state of a confirmation wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationResult {
    /// The transaction was observed on-chain.
    Confirmed(Box<TransactionContent>),
    /// The poll budget ran out; the transaction may still be pending.
    TimedOut,
    /// The submission had already failed; no polling happened.
    SubmissionFailed,
    /// The caller cancelled the wait.
    Cancelled,
}

impl ConfirmationResult {
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }

    /// Short label for logs and CLI output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Confirmed(_) => "confirmed",
            Self::TimedOut => "timed out",
            Self::SubmissionFailed => "submission failed",
            Self::Cancelled => "cancelled",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
