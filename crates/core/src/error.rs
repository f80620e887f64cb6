//! Billing error model.

use thiserror::Error;

/// Result type used across the billing domain.
pub type BillingResult<T> = Result<T, BillingError>;

/// Domain-level billing error.
///
/// Keep this focused on deterministic precondition failures. Statements are
/// all-or-nothing: any of these aborts the whole computation, since a
/// silently guessed price is a correctness hazard for a billing system.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A play's type tag matches no known pricing variant.
    #[error("unknown play type: {0}")]
    UnknownPlayType(String),

    /// A performance references a play id absent from the catalog.
    #[error("play not found: {0}")]
    PlayNotFound(String),

    /// Catalog or invoice configuration failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated (e.g. total overflow).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl BillingError {
    pub fn unknown_play_type(kind: impl Into<String>) -> Self {
        Self::UnknownPlayType(kind.into())
    }

    pub fn play_not_found(id: impl Into<String>) -> Self {
        Self::PlayNotFound(id.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
