// crates/write_markers_csv/src/lib.rs

use std::fs::File;
use std::io::Write;
use std::path::Path;
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use markers_listing::CSV_COLUMNS;
use parse_markers::MarkerRecord;

/// Writes `records` as CSV to `output_path`, replacing any existing file.
///
/// The first row is always the column header, so an empty slice produces a
/// header-only file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_markers_csv<P: AsRef<Path>>(records: &[MarkerRecord], output_path: P) -> Result<()> {
    let output_path_ref = output_path.as_ref();
    let file = File::create(output_path_ref)
        .with_context(|| format!("Error creating file {}", output_path_ref.display()))?;

    write_markers_csv_to(records, file)
        .with_context(|| format!("Error writing CSV to {}", output_path_ref.display()))?;
    log::debug!("Wrote {} row(s) to {}", records.len(), output_path_ref.display());
    Ok(())
}

/// Writes `records` as CSV to any writer. Fields are quoted only when they
/// contain a delimiter, a quote or a line break; rows end with `\n`.
pub fn write_markers_csv_to<W: Write>(records: &[MarkerRecord], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.fields())?;
    }
    csv_writer.flush()?;
    Ok(())
}
