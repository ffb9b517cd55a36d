//! Application state for the web layer.

use std::sync::Arc;

use crate::upstream::Upstream;

/// Shared application state.
///
/// Holds only the page source. Every request builds its records from a
/// fresh fetch, so there is nothing mutable to share.
#[derive(Clone)]
pub struct AppState {
    /// Source of AMT pages (live site or fixtures)
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}
