//! Page source abstraction.

use futures::future::BoxFuture;

use crate::domain::{LineCode, StopCode};

use super::error::UpstreamError;

/// A source of AMT pages.
///
/// Implemented by [`AmtClient`](super::AmtClient) for the live site and by
/// [`MockUpstream`](super::MockUpstream) for fixtures. The web layer holds one
/// behind an `Arc<dyn Upstream>`, so implementations must be shareable across
/// request tasks.
pub trait Upstream: Send + Sync {
    /// Fetch the raw arrival board page for a stop.
    fn fetch_stop<'a>(&'a self, code: &'a StopCode) -> BoxFuture<'a, Result<String, UpstreamError>>;

    /// Fetch the raw timetable page for a line, for today's date.
    fn fetch_line<'a>(&'a self, code: &'a LineCode) -> BoxFuture<'a, Result<String, UpstreamError>>;
}
