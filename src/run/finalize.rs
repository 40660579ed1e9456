//! Audit finalization.
//!
//! Fixes the column order, writes the CSV once, and builds the summary.

use std::time::Instant;

use anyhow::Result;

use crate::config::Config;
use crate::export::write_csv;
use crate::report::ReportAggregator;

use super::AuditReport;

/// Writes the accumulated rows to `config.output` and produces the final report.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub(crate) fn finalize_audit(
    config: &Config,
    aggregator: ReportAggregator,
    start_time: Instant,
) -> Result<AuditReport> {
    if aggregator.is_empty() {
        log::warn!("No domains in {}; writing header only", config.input.display());
    }
    let report = aggregator.finalize();
    let rows_with_errors = report
        .rows
        .iter()
        .filter(|row| row.error().is_some())
        .count();

    let total_domains = write_csv(&config.output, &report.columns, &report.rows)?;
    println!("Done: Results saved to {}", config.output.display());

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    log::info!(
        "Wrote {} rows ({} with errors) across {} columns in {:.1}s",
        total_domains,
        rows_with_errors,
        report.columns.len(),
        elapsed_seconds
    );

    Ok(AuditReport {
        total_domains,
        rows_with_errors,
        columns: report.columns,
        output_path: config.output.clone(),
        elapsed_seconds,
    })
}
