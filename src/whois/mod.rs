//! WHOIS/RDAP domain registration lookup.
//!
//! [`WhoisSource`] is the seam to the outside world: the production
//! implementation is [`WhoisServiceSource`], tests plug in canned results.
//! [`lookup_whois`] turns whatever the source returns into report fields.
//!
//! The fallback contract is all-or-nothing: a successful lookup always yields
//! the six registration fields (each defaulting to `N/A`), a failed one yields
//! only `error`.

mod client;
mod parse;
mod types;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use crate::config::{
    DATE_FORMAT, FIELD_CREATED, FIELD_ERROR, FIELD_EXPIRES, FIELD_NAMESERVERS, FIELD_REGISTRAR,
    FIELD_STATUS, FIELD_UPDATED, NOT_AVAILABLE, VALUE_SEPARATOR, WHOIS_ERROR_PREFIX,
};
use crate::error_handling::WhoisLookupError;
use crate::report::Fields;

// Re-export public API
pub use client::WhoisServiceSource;
pub use types::WhoisResult;

/// A capability that can fetch registration data for a domain.
#[async_trait]
pub trait WhoisSource: Send + Sync {
    /// Looks up `domain`. Any failure (network, timeout, unsupported TLD,
    /// unparseable response) is an error; partial results are not returned.
    async fn query(&self, domain: &str) -> Result<WhoisResult, WhoisLookupError>;
}

/// Performs a WHOIS lookup for a domain and flattens it into report fields.
///
/// On success: `registrar`, `created`, `expires`, `nameservers`, `status` and
/// `updated`. On failure: a single `error` field prefixed `WHOIS Error: `.
pub async fn lookup_whois(source: &dyn WhoisSource, domain: &str) -> Fields {
    match source.query(domain).await {
        Ok(result) => {
            log::info!("WHOIS lookup successful for {}", domain);
            whois_fields(&result)
        }
        Err(e) => {
            log::warn!("WHOIS lookup failed for {}: {}", domain, e);
            let mut fields = Fields::new();
            fields.insert(FIELD_ERROR.to_string(), format!("{WHOIS_ERROR_PREFIX}{e}"));
            fields
        }
    }
}

/// Maps a WHOIS result onto the report's registration columns.
pub fn whois_fields(result: &WhoisResult) -> Fields {
    let mut fields = Fields::new();
    fields.insert(
        FIELD_REGISTRAR.to_string(),
        result
            .registrar
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    );
    fields.insert(FIELD_CREATED.to_string(), first_date(&result.creation_dates));
    fields.insert(FIELD_EXPIRES.to_string(), first_date(&result.expiration_dates));
    fields.insert(FIELD_NAMESERVERS.to_string(), joined(&result.nameservers));
    fields.insert(FIELD_STATUS.to_string(), joined(&result.status));
    fields.insert(FIELD_UPDATED.to_string(), first_date(&result.updated_dates));
    fields
}

fn first_date(dates: &[DateTime<FixedOffset>]) -> String {
    dates.first().map_or_else(
        || NOT_AVAILABLE.to_string(),
        |dt| dt.format(DATE_FORMAT).to_string(),
    )
}

fn joined(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(VALUE_SEPARATOR)
    }
}
