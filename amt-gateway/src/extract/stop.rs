//! Stop arrival board extraction.
//!
//! The stop page marks its name block with three `<font>` elements, the
//! second of which holds the stop name. Any other count means the operator
//! rendered its "stop does not exist" page. Arrivals are the table rows with
//! exactly four cells: line, destination, scheduled time, estimated time.

use tracing::debug;

use crate::domain::{ArrivalEntry, StopRecord};

use super::markup::{Document, Markup, Tag};

/// Parse a stop-lookup response body.
pub fn parse_stop(body: &str) -> StopRecord {
    let document = Document::parse(body);
    extract_stop(&document.root())
}

/// Build a [`StopRecord`] from the root of a stop page.
///
/// Never fails: a page without the three-marker name block yields
/// [`StopRecord::unknown`] whatever else it contains.
pub fn extract_stop<M: Markup>(root: &M) -> StopRecord {
    let markers = root.find_all(Tag::Font);

    let [_, name, _] = markers.as_slice() else {
        debug!(
            markers = markers.len(),
            "no stop name block on page, reporting unknown stop"
        );
        return StopRecord::unknown();
    };

    let arrivals = root
        .find_all(Tag::Row)
        .iter()
        .filter_map(arrival_from_row)
        .collect();

    StopRecord {
        name: name.text_content(),
        arrivals,
    }
}

/// Map a four-cell row to an arrival. Header and decoration rows have a
/// different cell count and are skipped.
fn arrival_from_row<M: Markup>(row: &M) -> Option<ArrivalEntry> {
    let cells = row.find_all(Tag::Cell);
    let [line, destination, scheduled, estimated] = cells.as_slice() else {
        return None;
    };

    Some(ArrivalEntry::new(
        line.text_content(),
        destination.text_content(),
        scheduled.text_content(),
        estimated.text_content(),
    ))
}
