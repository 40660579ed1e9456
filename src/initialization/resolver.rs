//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};

/// Initializes the DNS resolver used for every record query.
///
/// Uses the host's resolver configuration (`/etc/resolv.conf` and friends) when
/// it can be read, and falls back to hickory's default upstreams (Google Public
/// DNS) otherwise.
///
/// Each query gets a single attempt with a `DNS_TIMEOUT_SECS` timeout. The
/// answer cache is disabled so repeated domains in the input are re-queried.
pub fn init_resolver() -> TokioAsyncResolver {
    let config = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, _)) => config,
        Err(e) => {
            log::warn!("Could not read system DNS configuration ({e}), using defaults");
            ResolverConfig::default()
        }
    };

    TokioAsyncResolver::tokio(config, resolver_opts())
}

pub(crate) fn resolver_opts() -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // Search suffixes only apply to relative names; queries use absolute ones
    opts.ndots = 0;
    opts.cache_size = 0;
    opts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_opts_single_attempt_with_timeout() {
        let opts = resolver_opts();
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert_eq!(opts.attempts, 1);
        assert_eq!(opts.ndots, 0);
        assert_eq!(opts.cache_size, 0);
    }
}
