// crates/parse_markers/src/lib.rs

//! Line parser for the markers listing export.
//!
//! Everything before the `M A R K E R S  L I S T I N G` line is session
//! metadata and is ignored, as is the column-title row right after it. Each
//! remaining line is matched against a fixed structural pattern; lines that do
//! not match are dropped without a diagnostic.

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use markers_listing::{MARKERS_LISTING_HEADER, TITLE_ROWS};

/// id, timecode, time reference, units, name (up to the first tab run), comments.
static MARKER_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s+(\d{2}:\d{2}:\d{2}:\d{2})\s+(\d+)\s+(\w+)\s+(.*?)\t+(.*)").unwrap()
});

/// One marker line, exactly as captured. No field is coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRecord {
    pub marker: String,
    pub location: String,
    pub time_reference: String,
    pub units: String,
    pub name: String,
    pub comments: String,
}

impl MarkerRecord {
    /// The six fields in CSV column order.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.marker.as_str(),
            self.location.as_str(),
            self.time_reference.as_str(),
            self.units.as_str(),
            self.name.as_str(),
            self.comments.as_str(),
        ]
    }

    fn from_captures(caps: &Captures<'_>) -> Self {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
        Self {
            marker: group(1),
            location: group(2),
            time_reference: group(3),
            units: group(4),
            name: group(5),
            comments: group(6),
        }
    }
}

/// Records parsed from a listing, plus how many candidate lines were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub records: Vec<MarkerRecord>,
    pub skipped: usize,
}

/// Parses `text` into marker records in file order.
///
/// # Errors
///
/// Returns an error if no line contains the markers listing header.
pub fn parse_markers(text: &str) -> Result<Vec<MarkerRecord>> {
    parse_markers_report(text).map(|report| report.records)
}

/// Same as [`parse_markers`] but also counts the candidate lines that did not
/// match the marker pattern.
///
/// # Errors
///
/// Returns an error if no line contains the markers listing header.
pub fn parse_markers_report(text: &str) -> Result<ParseReport> {
    let lines: Vec<&str> = text.trim().split('\n').collect();

    let header_index = lines
        .iter()
        .position(|line| line.contains(MARKERS_LISTING_HEADER))
        .ok_or_else(|| anyhow!("Markers listing header '{}' not found", MARKERS_LISTING_HEADER))?;

    let mut report = ParseReport::default();
    for line in lines.iter().skip(header_index + 1 + TITLE_ROWS) {
        match parse_marker_line(line) {
            Some(record) => report.records.push(record),
            None => report.skipped += 1,
        }
    }

    log::debug!(
        "Header found on line {}: {} marker(s) parsed, {} line(s) skipped",
        header_index + 1,
        report.records.len(),
        report.skipped
    );
    Ok(report)
}

/// Matches a single candidate line. `None` means the line is not a marker.
pub fn parse_marker_line(line: &str) -> Option<MarkerRecord> {
    MARKER_LINE_RE
        .captures(line)
        .map(|caps| MarkerRecord::from_captures(&caps))
}
