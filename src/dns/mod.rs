//! DNS record collection.
//!
//! This module queries every record type of interest for a domain:
//! - an ANY query first, to pick up record types nobody asked for
//! - then each configured type (A, AAAA, MX, NS, TXT, SOA, CNAME, SRV, PTR)
//!
//! [`DnsBackend`] is the seam to the resolver. The production backend is
//! [`HickoryBackend`] (`hickory-resolver`); tests use canned answers.

mod records;
mod resolution;

use async_trait::async_trait;
use hickory_resolver::proto::rr::RecordType;

use crate::error_handling::DnsQueryError;

// Re-export public API
pub use records::lookup_dns;
pub use resolution::{classify_resolve_error, HickoryBackend};

/// One record from a DNS answer, in presentation format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    /// Concrete type of the record (an ANY query mixes several)
    pub record_type: RecordType,
    /// Record data as text, e.g. `10 mail.example.com.`
    pub value: String,
}

impl DnsAnswer {
    pub fn new(record_type: RecordType, value: impl Into<String>) -> Self {
        Self {
            record_type,
            value: value.into(),
        }
    }
}

/// A capability that can run a single DNS query.
#[async_trait]
pub trait DnsBackend: Send + Sync {
    /// Queries `domain` for `record_type`. An empty answer is reported as
    /// [`DnsQueryError::NoRecords`], never as `Ok(vec![])`.
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DnsQueryError>;
}

#[cfg(test)]
mod tests;
