//! Error types for Cardano domain operations.
//!
//! Lookups against the chain never fail across the public boundary (they
//! produce a [`LookupOutcome`](super::LookupOutcome)); this type covers the
//! fallible edges instead: building clients, parsing user-supplied keys and
//! loading configuration.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for Cardano client and configuration operations.
#[derive(Debug, Error)]
pub enum CardanoError {
    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),

    /// Missing or inconsistent configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CardanoError {
    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Convert to a `color_eyre::Report` for the binary's error handling.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
