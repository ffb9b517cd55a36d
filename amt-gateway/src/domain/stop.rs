//! Stop arrival board types.

use serde::{Deserialize, Serialize};

/// A single row of a stop's arrival board.
///
/// Every field is the display string published upstream. Times are not
/// parsed: "10:05", "in arrivo" and "*" all pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalEntry {
    /// Line name (e.g., "20", "N1")
    pub line: String,

    /// Destination shown for this run
    #[serde(rename = "dest")]
    pub destination: String,

    /// Scheduled time
    #[serde(rename = "time")]
    pub scheduled_time: String,

    /// Estimated time
    #[serde(rename = "eta")]
    pub estimated_time: String,
}

impl ArrivalEntry {
    /// Create an entry from the four cells of a board row.
    pub fn new(
        line: impl Into<String>,
        destination: impl Into<String>,
        scheduled_time: impl Into<String>,
        estimated_time: impl Into<String>,
    ) -> Self {
        Self {
            line: line.into(),
            destination: destination.into(),
            scheduled_time: scheduled_time.into(),
            estimated_time: estimated_time.into(),
        }
    }
}

/// Arrival board for a stop.
///
/// An unknown stop is not an error: it is represented by [`StopRecord::unknown`],
/// which has an empty name and no arrivals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRecord {
    /// Stop name as published upstream, empty for an unknown stop
    pub name: String,

    /// Upcoming arrivals in board order
    #[serde(rename = "stops")]
    pub arrivals: Vec<ArrivalEntry>,
}

impl StopRecord {
    /// The sentinel record for a stop code the operator does not know.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Returns true if this is the unknown-stop sentinel.
    pub fn is_unknown(&self) -> bool {
        self.name.is_empty() && self.arrivals.is_empty()
    }
}
