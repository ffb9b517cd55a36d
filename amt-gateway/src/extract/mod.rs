//! HTML extraction for AMT pages.
//!
//! Turns stop-lookup and timetable pages into domain records. Extraction is
//! written against the [`Markup`] capability rather than a concrete parser,
//! and never fails: pages that do not have the expected shape degrade to the
//! unknown-stop sentinel or an empty/partial timetable, with a log line.

mod line;
mod markup;
mod stop;

#[cfg(test)]
mod testing;

pub use line::{LINE_HEADER_PREFIX, extract_line, pair_directions, parse_line};
pub use markup::{Document, Markup, Tag};
pub use stop::{extract_stop, parse_stop};
