//! Audit driver.
//!
//! Strictly sequential: read the domain list, then for every domain run the
//! WHOIS lookup, the DNS lookup, merge the two into a row and wait before the
//! next one. The CSV is written once, after the last domain; interrupting a run
//! loses its results.

mod finalize;
mod input;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::dns::{lookup_dns, DnsBackend};
use crate::error_handling::AuditError;
use crate::initialization::{init_dns_backend, init_whois_source};
use crate::rate_limiter::RateLimiter;
use crate::report::ReportAggregator;
use crate::whois::{lookup_whois, WhoisSource};

pub use input::read_domains;

use finalize::finalize_audit;

/// Summary of a completed audit run.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Number of domains processed (rows written)
    pub total_domains: usize,
    /// Rows carrying an `error` field
    pub rows_with_errors: usize,
    /// Columns of the CSV, in order
    pub columns: Vec<String>,
    /// Path of the CSV report
    pub output_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs an audit against live WHOIS and DNS services.
///
/// # Errors
///
/// Returns `AuditError::InputFileMissing` (before any network activity) if the
/// input file does not exist, or an error if the WHOIS client cannot be created
/// or the report cannot be written.
///
/// # Example
///
/// ```no_run
/// use domain_audit::{run, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     input: PathBuf::from("domains.txt"),
///     output: PathBuf::from("report.csv"),
///     ..Default::default()
/// };
/// let report = run(config).await?;
/// println!("{} domains audited", report.total_domains);
/// # Ok(())
/// # }
/// ```
pub async fn run(config: Config) -> Result<AuditReport> {
    // The WHOIS client bootstraps over the network; check the input first
    if !tokio::fs::try_exists(&config.input).await.unwrap_or(false) {
        return Err(AuditError::InputFileMissing(config.input.clone()).into());
    }

    let dns = init_dns_backend();
    let whois = init_whois_source()
        .await
        .context("Failed to initialize WHOIS client")?;

    run_audit(&config, &whois, &dns).await
}

/// Runs an audit with the given WHOIS and DNS capabilities.
///
/// Per-domain lookup failures are recorded in the row's `error` field and never
/// stop the loop.
///
/// # Errors
///
/// Returns an error if the input file is missing or unreadable, or if the
/// report cannot be written.
pub async fn run_audit(
    config: &Config,
    whois: &dyn WhoisSource,
    dns: &dyn DnsBackend,
) -> Result<AuditReport> {
    let start_time = Instant::now();

    let domains = read_domains(&config.input).await?;
    let total = domains.len();
    let limiter = RateLimiter::new(config.delay());
    let mut aggregator = ReportAggregator::new();

    for (index, domain) in domains.iter().enumerate() {
        let position = index + 1;
        println!("Processing ({position}/{total}): {domain}");

        let whois_fields = lookup_whois(whois, domain).await;
        let dns_fields = lookup_dns(dns, domain, &config.record_types).await;
        let record = ReportAggregator::merge(domain, whois_fields, dns_fields);
        if let Some(error) = record.error() {
            log::debug!("{} recorded with error: {}", domain, error);
        }
        aggregator.record(record);

        limiter.wait(position == total).await;
    }

    finalize_audit(config, aggregator, start_time)
}
