//! Report export.
//!
//! Writes the finalized report as CSV.

mod csv;

pub use self::csv::{write_csv, write_report};
