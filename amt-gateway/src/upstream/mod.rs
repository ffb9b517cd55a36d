//! AMT website client.
//!
//! Fetches raw HTML pages from the Genoa transit operator's site. The
//! gateway never caches or retries: each API request produces exactly one
//! upstream request, and any failure to obtain a page is reported as an
//! [`UpstreamError`] rather than an empty body.

mod client;
mod error;
mod mock;
mod provider;

pub use client::{
    AmtClient, DEFAULT_LINE_URL, DEFAULT_STOP_URL, TimetableForm, UpstreamConfig,
};
pub use error::UpstreamError;
pub use mock::MockUpstream;
pub use provider::Upstream;
