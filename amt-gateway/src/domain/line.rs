//! Line timetable types.

use serde::{Deserialize, Serialize};

/// Departures for one direction of a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionSchedule {
    /// Destination label for this direction
    pub direction: String,

    /// Departure times, verbatim and in published order
    pub times: Vec<String>,
}

impl DirectionSchedule {
    pub fn new(direction: impl Into<String>, times: Vec<String>) -> Self {
        Self {
            direction: direction.into(),
            times,
        }
    }
}

/// Full timetable for a line, one entry per direction in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    #[serde(rename = "lines")]
    pub directions: Vec<DirectionSchedule>,
}
