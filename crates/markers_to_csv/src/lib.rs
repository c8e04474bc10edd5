// crates/markers_to_csv/src/lib.rs

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use parse_markers::parse_markers_report;
use read_markers_file::read_markers_file;
use write_markers_csv::write_markers_csv;

/// Resolved command-line inputs for one conversion.
#[derive(Clone, Debug)]
pub struct MarkersConfig {
    /// Markers listing text export to read.
    pub input: PathBuf,
    /// CSV file to create or overwrite.
    pub output: PathBuf,
    /// Enable verbose logging.
    pub verbose: bool,
}

/// Reads `input`, parses its markers and writes them as CSV to `output`.
/// Returns the number of rows written, header excluded.
///
/// Nothing is written when reading or parsing fails.
pub fn convert_markers<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    let content = read_markers_file(input)?;
    let report = parse_markers_report(&content)
        .with_context(|| format!("Failed to parse markers from {}", input.display()))?;

    write_markers_csv(&report.records, output)?;
    Ok(report.records.len())
}

/// Runs one conversion for `config` and logs a summary.
pub fn run(config: &MarkersConfig) -> Result<usize> {
    let count = convert_markers(&config.input, &config.output)?;
    log::info!(
        "Converted {} marker(s) from {} to {}",
        count,
        config.input.display(),
        config.output.display()
    );
    Ok(count)
}
