//! AMT website HTTP client.
//!
//! Fetches the two pages the gateway scrapes: the stop arrival board (a GET
//! with the stop code appended to a fixed URL) and the line timetable (a
//! form POST naming the line and today's date).

use std::time::Duration;

use chrono::{Datelike, Local, NaiveDate};
use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use crate::domain::{LineCode, StopCode};

use super::error::UpstreamError;
use super::provider::Upstream;

/// Default stop lookup URL; the stop code is appended verbatim.
pub const DEFAULT_STOP_URL: &str = "https://www.amt.genova.it/amt/simon.php?CodiceFermata=";

/// Default timetable endpoint.
pub const DEFAULT_LINE_URL: &str = "https://www.amt.genova.it/amt/servizi/orari_tel.php";

/// Value of the timetable form's submit button.
const SHOW_TIMETABLE_COMMAND: &str = "Mostra Orari";

/// Configuration for the AMT client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Stop lookup URL prefix
    pub stop_url: String,
    /// Timetable form endpoint
    pub line_url: String,
    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            stop_url: DEFAULT_STOP_URL.to_string(),
            line_url: DEFAULT_LINE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl UpstreamConfig {
    /// Set a custom stop lookup URL prefix (for testing).
    pub fn with_stop_url(mut self, url: impl Into<String>) -> Self {
        self.stop_url = url.into();
        self
    }

    /// Set a custom timetable endpoint (for testing).
    pub fn with_line_url(mut self, url: impl Into<String>) -> Self {
        self.line_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Form fields of the timetable request.
///
/// The site's date picker is a JavaScript calendar, so the month is
/// zero-based (January is 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableForm {
    pub day: u32,
    pub month0: u32,
    pub year: i32,
    pub line: LineCode,
}

impl TimetableForm {
    /// Build the form for a line on a given date.
    pub fn new(line: LineCode, date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month0: date.month0(),
            year: date.year(),
            line,
        }
    }

    /// Form fields in submission order.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("giorno", self.day.to_string()),
            ("mese", self.month0.to_string()),
            ("anno", self.year.to_string()),
            ("linea", self.line.as_str().to_string()),
            ("cmdOrari", SHOW_TIMETABLE_COMMAND.to_string()),
        ]
    }
}

/// AMT website client.
///
/// Holds no per-request state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AmtClient {
    http: reqwest::Client,
    stop_url: String,
    line_url: String,
}

impl AmtClient {
    /// Create a new client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            stop_url: config.stop_url,
            line_url: config.line_url,
        })
    }

    /// URL of the arrival board page for a stop.
    pub fn stop_url(&self, code: &StopCode) -> String {
        format!("{}{}", self.stop_url, code)
    }

    /// Get the arrival board page for a stop.
    pub async fn get_stop_page(&self, code: &StopCode) -> Result<String, UpstreamError> {
        let url = self.stop_url(code);
        debug!(%url, "fetching stop page");

        let response = self.http.get(&url).send().await?;
        read_body(response).await
    }

    /// Get today's timetable page for a line.
    pub async fn get_timetable_page(&self, code: &LineCode) -> Result<String, UpstreamError> {
        self.get_timetable_page_on(code, Local::now().date_naive())
            .await
    }

    /// Get the timetable page for a line on a specific date.
    pub async fn get_timetable_page_on(
        &self,
        code: &LineCode,
        date: NaiveDate,
    ) -> Result<String, UpstreamError> {
        let form = TimetableForm::new(*code, date);
        debug!(line = %code, %date, "fetching timetable page");

        let response = self
            .http
            .post(&self.line_url)
            .form(&form.fields())
            .send()
            .await?;
        read_body(response).await
    }
}

/// Read a response body, treating any non-success status as a failure.
async fn read_body(response: reqwest::Response) -> Result<String, UpstreamError> {
    let status = response.status();

    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}

impl Upstream for AmtClient {
    fn fetch_stop<'a>(&'a self, code: &'a StopCode) -> BoxFuture<'a, Result<String, UpstreamError>> {
        self.get_stop_page(code).boxed()
    }

    fn fetch_line<'a>(&'a self, code: &'a LineCode) -> BoxFuture<'a, Result<String, UpstreamError>> {
        self.get_timetable_page(code).boxed()
    }
}
