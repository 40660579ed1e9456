//! Error type definitions.
//!
//! Per-domain lookup failures (`WhoisLookupError`, `DnsQueryError`) never abort a
//! run: they are folded into the report's `error` column. Only
//! `InitializationError` and `AuditError` surface to the caller.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error creating the WHOIS/RDAP client.
    #[error("WHOIS client initialization error: {0}")]
    WhoisClientError(String),
}

/// Fatal errors for a whole audit run.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The domain list does not exist. Raised before any lookup is made.
    #[error("{} not found", .0.display())]
    InputFileMissing(PathBuf),

    /// The domain list exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    InputRead {
        /// Path of the domain list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single WHOIS lookup.
///
/// The display text is what ends up after `WHOIS Error: ` in the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhoisLookupError {
    /// The lookup did not finish within the configured timeout.
    #[error("lookup timed out after {0}s")]
    Timeout(u64),

    /// The WHOIS/RDAP client reported an error (network, unsupported TLD, ...).
    #[error("{0}")]
    Client(String),

    /// The server answered but nothing could be parsed out of the response.
    #[error("no parsed WHOIS data for {0}")]
    NoParsedData(String),
}

/// Outcome of a failed DNS query for one record type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsQueryError {
    /// The name exists but has no records of the queried type.
    #[error("no records found")]
    NoRecords,

    /// The name does not exist.
    #[error("NXDOMAIN")]
    NxDomain,

    /// No nameserver could answer (SERVFAIL, REFUSED, no reachable server).
    #[error("server failure: {0}")]
    ServerFailure(String),

    /// The query exceeded its time budget.
    #[error("query timed out")]
    Timeout,

    /// Any other resolver error (I/O, malformed response, ...).
    #[error("{0}")]
    Other(String),
}
