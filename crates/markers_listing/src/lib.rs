// crates/markers_listing/src/lib.rs

//! Fixed strings of the markers listing export and of the CSV it becomes.

/// Magic line that opens the markers section (two spaces between the words).
pub const MARKERS_LISTING_HEADER: &str = "M A R K E R S  L I S T I N G";

/// Number of lines following the header that are column titles, not markers.
pub const TITLE_ROWS: usize = 1;

/// Column names of the output CSV, in record order.
pub const CSV_COLUMNS: [&str; 6] = [
    "Marker",
    "Location",
    "Time Reference",
    "Units",
    "Name",
    "Comments",
];
