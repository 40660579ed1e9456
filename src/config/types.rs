//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use hickory_resolver::proto::rr::RecordType;

use crate::config::constants::{DEFAULT_DELAY_SECS, DEFAULT_RECORD_TYPES};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use domain_audit::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("domains.txt"),
///     output: PathBuf::from("report.csv"),
///     delay_seconds: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Newline-separated list of domains
    pub input: PathBuf,

    /// CSV report path (overwritten if present)
    pub output: PathBuf,

    /// Seconds to wait between two consecutive domains
    pub delay_seconds: u64,

    /// Record types queried individually after the ANY query
    pub record_types: Vec<RecordType>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Delay between two consecutive domains.
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("domains.txt"),
            output: PathBuf::from("report.csv"),
            delay_seconds: DEFAULT_DELAY_SECS,
            record_types: DEFAULT_RECORD_TYPES.to_vec(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Default 5 second delay between domains
/// domain_audit domains.txt report.csv
///
/// # Custom delay
/// domain_audit domains.txt report.csv 10
///
/// # Verbose, machine-readable logs
/// domain_audit domains.txt report.csv --log-level debug --log-format json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_audit",
    version,
    about = "Collects WHOIS and DNS records for a list of domains into a CSV report.",
    after_help = crate::config::constants::USAGE_EXAMPLE
)]
pub struct Opt {
    /// Text file with one domain per line (blank lines are ignored)
    #[arg(value_parser)]
    pub input: PathBuf,

    /// CSV file to write (overwritten if it exists)
    #[arg(value_parser)]
    pub output: PathBuf,

    /// Seconds to wait between domains
    #[arg(default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            output: opt.output,
            delay_seconds: opt.delay,
            record_types: DEFAULT_RECORD_TYPES.to_vec(),
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
