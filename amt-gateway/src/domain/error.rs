//! Domain error types.
//!
//! These errors represent validation failures for the path parameters the
//! API accepts. They are distinct from upstream/IO errors.

/// Validation errors for stop and line codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// Stop code is not exactly four ASCII digits
    #[error("invalid stop code: {0:?} (expected 4 digits)")]
    InvalidStop(String),

    /// Line code is not 1-3 characters of `[A-Z0-9]`
    #[error("invalid line code: {0:?} (expected 1-3 of A-Z, 0-9)")]
    InvalidLine(String),
}
