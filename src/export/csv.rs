//! CSV export functionality.
//!
//! One row per domain, one column per field name. Cells for fields a domain
//! does not have are left empty; fields not in the column list are dropped.

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;

use crate::report::DomainRecord;

/// Writes the report to `path`, replacing any existing file.
///
/// # Arguments
///
/// * `path` - Output file path
/// * `columns` - Ordered column names (header row)
/// * `rows` - Report rows, written in order
///
/// # Returns
///
/// Returns the number of rows written, or an error if the file cannot be
/// created or written.
pub fn write_csv(path: &Path, columns: &[String], rows: &[DomainRecord]) -> Result<usize> {
    // File::create truncates, so a previous report is replaced rather than appended to
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_report(file, columns, rows)
        .with_context(|| format!("Failed to write CSV report: {}", path.display()))
}

/// Writes the header and rows to any writer.
///
/// Records end in CRLF and fields are quoted only when they contain a
/// delimiter, quote or line break (RFC 4180).
pub fn write_report<W: Write>(output: W, columns: &[String], rows: &[DomainRecord]) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(output);

    writer.write_record(columns)?;

    let mut record_count = 0;
    for row in rows {
        writer.write_record(columns.iter().map(|column| row.get(column).unwrap_or("")))?;
        record_count += 1;
    }

    writer.flush()?;
    log::debug!("Wrote {} CSV rows across {} columns", record_count, columns.len());
    Ok(record_count)
}
