//! domain_audit library: batch WHOIS and DNS auditing of domain lists
//!
//! Reads a list of domains, queries WHOIS registration data and DNS records for
//! each one in turn (pausing between domains), and writes one CSV row per
//! domain with a column for every field observed across the whole run.
//!
//! # Example
//!
//! ```no_run
//! use domain_audit::{run, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("domains.txt"),
//!     output: std::path::PathBuf::from("report.csv"),
//!     delay_seconds: 5,
//!     ..Default::default()
//! };
//!
//! let report = run(config).await?;
//! println!("Audited {} domains ({} with errors)",
//!          report.total_domains, report.rows_with_errors);
//! # Ok(())
//! # }
//! ```
//!
//! # Testing without the network
//!
//! [`run_audit`] takes the WHOIS and DNS capabilities as trait objects, so a
//! caller can supply its own [`WhoisSource`] and [`DnsBackend`].
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod rate_limiter;
pub mod report;
mod run;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{DnsAnswer, DnsBackend};
pub use error_handling::{AuditError, DnsQueryError, WhoisLookupError};
pub use report::{DomainRecord, Fields};
pub use run::{read_domains, run, run_audit, AuditReport};
pub use whois::{WhoisResult, WhoisSource};
