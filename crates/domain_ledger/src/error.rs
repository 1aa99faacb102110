//! Ledger domain errors

use ledger_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// One or more entity invariants were violated at construction.
    /// The message lists every broken rule, not just the first.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A transaction referenced a card name that does not exist
    #[error("Card \"{0}\" not found.")]
    CardNotFound(String),

    /// A summary was requested over an inverted date range
    #[error("End date cannot be earlier than start date.")]
    InvalidDateRange,

    /// An adapter failed; propagated unchanged, retries are the
    /// adapter's concern
    #[error(transparent)]
    Port(#[from] PortError),
}

impl LedgerError {
    /// Builds a validation failure from the collected rule violations
    pub fn validation(errors: Vec<String>) -> Self {
        LedgerError::Validation(errors.join(" "))
    }

    /// Returns true if this is an entity validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_))
    }
}
