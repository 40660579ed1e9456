//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - DNS resolver and the backend built on it
//! - WHOIS/RDAP client

mod logger;
mod resolver;

use std::time::Duration;

use crate::config::{DNS_LIFETIME_SECS, WHOIS_TIMEOUT_SECS};
use crate::dns::HickoryBackend;
use crate::error_handling::InitializationError;
use crate::whois::WhoisServiceSource;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
#[cfg(test)]
pub(crate) use resolver::resolver_opts;

/// Builds the live DNS backend with the per-query lifetime budget.
pub fn init_dns_backend() -> HickoryBackend {
    HickoryBackend::new(init_resolver(), Duration::from_secs(DNS_LIFETIME_SECS))
}

/// Builds the live WHOIS source.
///
/// # Errors
///
/// Returns `InitializationError::WhoisClientError` if the whois-service client
/// cannot be created.
pub async fn init_whois_source() -> Result<WhoisServiceSource, InitializationError> {
    WhoisServiceSource::connect(Duration::from_secs(WHOIS_TIMEOUT_SECS)).await
}
