//! Upstream client error types.

/// Errors from fetching AMT pages.
///
/// Every variant means the same thing to a caller: the page could not be
/// obtained, so there is nothing to extract. None of them is ever turned into
/// an empty body.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Request failed or the body could not be read (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned status {status}")]
    Status { status: u16 },

    /// Upstream deliberately offline (mock upstream in unavailable mode)
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// Mock fixture directory could not be loaded
    #[error("fixture error: {0}")]
    Fixture(String),
}

impl UpstreamError {
    /// Returns true if the request timed out before a response arrived.
    pub fn is_timeout(&self) -> bool {
        matches!(self, UpstreamError::Http(e) if e.is_timeout())
    }
}
