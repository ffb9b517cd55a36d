//! Mock upstream for testing without access to the AMT site.
//!
//! Serves stop and timetable pages from HTML fixtures as if they were live
//! responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::{self, BoxFuture, FutureExt};

use crate::domain::{LineCode, StopCode};

use super::error::UpstreamError;
use super::provider::Upstream;

/// Mock upstream that serves pages from memory.
///
/// Codes without a page get an empty document, which is what the site's
/// "unknown stop" and "no service" pages extract to. In unavailable mode
/// every fetch fails.
#[derive(Debug, Default)]
pub struct MockUpstream {
    stops: HashMap<StopCode, String>,
    lines: HashMap<LineCode, String>,
    unavailable: bool,
    fetches: AtomicUsize,
}

impl MockUpstream {
    /// Create an empty mock upstream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock upstream whose every fetch fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Load fixtures from a directory.
    ///
    /// Expects `stops/{code}.html` and `lines/{code}.html` (e.g.,
    /// `stops/0001.html`, `lines/20.html`). Either subdirectory may be absent,
    /// but at least one page must be found.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, UpstreamError> {
        let data_dir = data_dir.as_ref();

        let stops = load_pages(&data_dir.join("stops"), |s| StopCode::parse(s).ok())?;
        let lines = load_pages(&data_dir.join("lines"), |s| LineCode::parse(s).ok())?;

        if stops.is_empty() && lines.is_empty() {
            return Err(UpstreamError::Fixture(format!(
                "no fixture pages found in {:?}",
                data_dir
            )));
        }

        Ok(Self {
            stops,
            lines,
            ..Self::default()
        })
    }

    /// Serve `html` for a stop code.
    pub fn with_stop(mut self, code: StopCode, html: impl Into<String>) -> Self {
        self.stops.insert(code, html.into());
        self
    }

    /// Serve `html` for a line code.
    pub fn with_line(mut self, code: LineCode, html: impl Into<String>) -> Self {
        self.lines.insert(code, html.into());
        self
    }

    /// Number of fetches attempted so far, including failed ones.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    /// Stop codes with a page, sorted.
    pub fn available_stops(&self) -> Vec<StopCode> {
        let mut codes: Vec<_> = self.stops.keys().copied().collect();
        codes.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        codes
    }

    /// Line codes with a page, sorted.
    pub fn available_lines(&self) -> Vec<LineCode> {
        let mut codes: Vec<_> = self.lines.keys().copied().collect();
        codes.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        codes
    }

    fn serve(&self, page: Option<&String>) -> Result<String, UpstreamError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);

        if self.unavailable {
            return Err(UpstreamError::Unavailable(
                "mock upstream is offline".to_string(),
            ));
        }

        Ok(page.cloned().unwrap_or_default())
    }
}

impl Upstream for MockUpstream {
    fn fetch_stop<'a>(&'a self, code: &'a StopCode) -> BoxFuture<'a, Result<String, UpstreamError>> {
        future::ready(self.serve(self.stops.get(code))).boxed()
    }

    fn fetch_line<'a>(&'a self, code: &'a LineCode) -> BoxFuture<'a, Result<String, UpstreamError>> {
        future::ready(self.serve(self.lines.get(code))).boxed()
    }
}

/// Read every `{code}.html` file in `dir`, keyed by the parsed code.
fn load_pages<K, F>(dir: &Path, parse_code: F) -> Result<HashMap<K, String>, UpstreamError>
where
    K: std::hash::Hash + Eq,
    F: Fn(&str) -> Option<K>,
{
    let mut pages = HashMap::new();

    if !dir.is_dir() {
        return Ok(pages);
    }

    let entries = std::fs::read_dir(dir).map_err(|e| {
        UpstreamError::Fixture(format!("failed to read fixture directory {:?}: {}", dir, e))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            UpstreamError::Fixture(format!("failed to read directory entry: {}", e))
        })?;

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("html") {
            continue;
        }

        // Extract the code from the filename (e.g., "0001.html" -> "0001")
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| UpstreamError::Fixture(format!("invalid filename: {:?}", path)))?;

        let code = parse_code(stem).ok_or_else(|| {
            UpstreamError::Fixture(format!("invalid code in filename: {}", stem))
        })?;

        let html = std::fs::read_to_string(&path)
            .map_err(|e| UpstreamError::Fixture(format!("failed to read {:?}: {}", path, e)))?;

        pages.insert(code, html);
    }

    Ok(pages)
}
