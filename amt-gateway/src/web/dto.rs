//! Data transfer objects for web responses.
//!
//! Successful responses serialize the domain records directly; their wire
//! names are fixed by `serde` attributes on the domain types.

use serde::Serialize;

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
