//! WHOIS/RDAP source backed by the whois-service crate.

use std::time::Duration;

use async_trait::async_trait;
use whois_service::WhoisClient;

use super::parse::convert_parsed_data;
use super::types::WhoisResult;
use super::WhoisSource;
use crate::error_handling::{InitializationError, WhoisLookupError};

/// Live WHOIS source.
///
/// whois-service tries RDAP first and falls back to port-43 WHOIS, discovering
/// the authoritative server through the IANA bootstrap data. The client is built
/// once per run and reused for every domain.
pub struct WhoisServiceSource {
    client: WhoisClient,
    timeout: Duration,
}

impl WhoisServiceSource {
    /// Creates the underlying whois-service client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::WhoisClientError` if the client cannot load
    /// its configuration.
    pub async fn connect(timeout: Duration) -> Result<Self, InitializationError> {
        let client = WhoisClient::new()
            .await
            .map_err(|e| InitializationError::WhoisClientError(e.to_string()))?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl WhoisSource for WhoisServiceSource {
    async fn query(&self, domain: &str) -> Result<WhoisResult, WhoisLookupError> {
        log::debug!("Starting WHOIS lookup for domain: {}", domain);

        let response = tokio::time::timeout(self.timeout, self.client.lookup(domain))
            .await
            .map_err(|_| WhoisLookupError::Timeout(self.timeout.as_secs()))?
            .map_err(|e| WhoisLookupError::Client(e.to_string()))?;

        log::debug!(
            "WHOIS response for {} from {} ({} bytes)",
            domain,
            response.whois_server,
            response.raw_data.len()
        );
        convert_parsed_data(domain, &response)
    }
}
