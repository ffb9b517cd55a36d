//! Line timetable extraction.
//!
//! The timetable page lists each direction's label in a `<b>` element and
//! each direction's departures in its own `<table>`. Labels and tables are
//! found independently and paired by position, so the Nth label names the
//! Nth timetable. Bold text starting with [`LINE_HEADER_PREFIX`] is the line
//! title, not a direction.

use tracing::warn;

use crate::domain::{DirectionSchedule, LineRecord};

use super::markup::{Document, Markup, Tag};

/// Prefix of the bold line title ("LINEA 20 ..."), which is not a direction.
pub const LINE_HEADER_PREFIX: &str = "LINEA";

/// Parse a line-timetable response body.
pub fn parse_line(body: &str) -> LineRecord {
    let document = Document::parse(body);
    extract_line(&document.root())
}

/// Build a [`LineRecord`] from the root of a timetable page.
pub fn extract_line<M: Markup>(root: &M) -> LineRecord {
    let labels = direction_labels(root);
    let tables = timetables(root);

    LineRecord {
        directions: pair_directions(labels, tables),
    }
}

/// Bold texts in page order, minus the line title.
///
/// The title check runs on the trimmed text, so padding around `LINEA` in the
/// markup does not let the title through as a direction.
fn direction_labels<M: Markup>(root: &M) -> Vec<String> {
    root.find_all(Tag::Bold)
        .iter()
        .map(Markup::text_content)
        .filter(|text| !text.starts_with(LINE_HEADER_PREFIX))
        .collect()
}

/// Cell texts of every table that has cells, in page order. Layout tables
/// without cells are not timetables.
fn timetables<M: Markup>(root: &M) -> Vec<Vec<String>> {
    root.find_all(Tag::Table)
        .iter()
        .map(|table| {
            table
                .find_all(Tag::Cell)
                .iter()
                .map(Markup::text_content)
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}

/// Pair labels with timetables by position.
///
/// Iteration stops at the shorter sequence. A count mismatch means the page
/// layout has drifted from what the extractor expects; it is logged and the
/// unpaired tail is dropped.
pub fn pair_directions(labels: Vec<String>, tables: Vec<Vec<String>>) -> Vec<DirectionSchedule> {
    if labels.len() != tables.len() {
        warn!(
            labels = labels.len(),
            tables = tables.len(),
            "direction labels and timetables differ in count, dropping unpaired entries"
        );
    }

    labels
        .into_iter()
        .zip(tables)
        .map(|(direction, times)| DirectionSchedule { direction, times })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::extract::testing::FakeNode;

    /// Log sink shared between a test and its subscriber.
    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with a subscriber writing into the returned log.
    fn with_captured_log<T>(f: impl FnOnce() -> T) -> (T, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, log.contents())
    }

    fn times(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn line_page(title: &str, directions: &[(&str, &[&str])]) -> String {
        let mut body = format!("<html><body><b>{title}</b><table></table>");
        for (label, departures) in directions {
            body.push_str(&format!("<p><b>{label}</b></p><table><tr>"));
            for t in *departures {
                body.push_str(&format!("<td>{t}</td>"));
            }
            body.push_str("</tr></table>");
        }
        body.push_str("</body></html>");
        body
    }

    #[test]
    fn pairs_directions_in_page_order() {
        let body = line_page(
            "LINEA 20 - Sampierdarena / Brignole",
            &[
                ("BRIGNOLE", &["05:40", "06:10", "06:40"]),
                ("SAMPIERDARENA", &["05:55", "06:25"]),
            ],
        );

        let record = parse_line(&body);

        assert_eq!(
            record.directions,
            vec![
                DirectionSchedule::new("BRIGNOLE", times(&["05:40", "06:10", "06:40"])),
                DirectionSchedule::new("SAMPIERDARENA", times(&["05:55", "06:25"])),
            ]
        );
    }

    #[test]
    fn no_directions_serializes_to_empty_lines() {
        let body = line_page("LINEA 999", &[]);

        let record = parse_line(&body);

        assert!(record.directions.is_empty());
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"lines":[]}"#);
    }

    #[test]
    fn empty_body_yields_empty_record() {
        assert_eq!(parse_line(""), LineRecord::default());
    }

    #[test]
    fn every_title_variant_is_filtered() {
        let body = "<b>LINEA 1</b><b>LINEA 1 festivo</b><b>VOLTRI</b>\
                    <table><tr><td>07:00</td></tr></table>";

        let record = parse_line(body);

        assert_eq!(record.directions.len(), 1);
        assert_eq!(record.directions[0].direction, "VOLTRI");
    }

    #[test]
    fn padded_title_is_filtered() {
        let body = "<b>\n   LINEA 20 </b><b> BRIGNOLE </b>\
                    <table><tr><td>06:10</td></tr></table>";

        let record = parse_line(body);

        assert_eq!(
            record.directions,
            vec![DirectionSchedule::new("BRIGNOLE", times(&["06:10"]))]
        );
    }

    #[test]
    fn count_mismatch_is_logged() {
        let (paired, log) = with_captured_log(|| {
            pair_directions(times(&["A", "B", "C"]), vec![times(&["1"])])
        });

        assert_eq!(paired.len(), 1);
        assert!(log.contains("WARN"), "{log}");
        assert!(log.contains("differ in count"), "{log}");
        assert!(log.contains("labels=3"), "{log}");
        assert!(log.contains("tables=1"), "{log}");
    }

    #[test]
    fn matching_counts_log_nothing() {
        let (paired, log) = with_captured_log(|| {
            pair_directions(times(&["A", "B"]), vec![times(&["1"]), times(&["2"])])
        });

        assert_eq!(paired.len(), 2);
        assert!(log.is_empty(), "{log}");
    }

    #[test]
    fn times_keep_verbatim_text() {
        let body = line_page("LINEA 7", &[("CAMPASSO", &["06:05*", "", "feriale"])]);

        let record = parse_line(&body);

        assert_eq!(record.directions[0].times, ["06:05*", "", "feriale"]);
    }

    #[test]
    fn extra_labels_are_dropped() {
        let record = LineRecord {
            directions: pair_directions(
                times(&["A", "B", "C"]),
                vec![times(&["1"]), times(&["2"])],
            ),
        };

        assert_eq!(record.directions.len(), 2);
        assert_eq!(record.directions[1].direction, "B");
        assert_eq!(record.directions[1].times, ["2"]);
    }

    #[test]
    fn extra_tables_are_dropped() {
        let body = "<b>A</b><table><tr><td>1</td></tr></table>\
                    <table><tr><td>2</td></tr></table>";

        let record = parse_line(body);

        assert_eq!(record.directions, vec![DirectionSchedule::new("A", times(&["1"]))]);
    }

    #[test]
    fn works_over_any_markup() {
        let table = |cells: &[&str]| {
            FakeNode::element(
                Tag::Table,
                vec![FakeNode::element(
                    Tag::Row,
                    cells.iter().map(|c| FakeNode::cell(c)).collect(),
                )],
            )
        };
        let root = FakeNode::element(
            Tag::Table,
            vec![
                FakeNode::bold("LINEA N1"),
                FakeNode::bold("CARICAMENTO"),
                FakeNode::element(Tag::Table, vec![]),
                table(&["00:10", "00:50"]),
            ],
        );

        let record = extract_line(&&root);

        assert_eq!(
            record.directions,
            vec![DirectionSchedule::new("CARICAMENTO", times(&["00:10", "00:50"]))]
        );
    }
}
