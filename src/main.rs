//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::process;

use domain_audit::config::{Opt, USAGE_EXAMPLE};
use domain_audit::initialization::init_logger_with;
use domain_audit::{run, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let opt = match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            eprintln!("{USAGE_EXAMPLE}");
            process::exit(1);
        }
    };
    let config = Config::from(opt);

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(config).await {
        Ok(report) => {
            log::info!(
                "Audited {} domain{} ({} with errors) in {:.1}s",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.rows_with_errors,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
