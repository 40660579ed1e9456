//! WHOIS data structures.

use chrono::{DateTime, FixedOffset};

/// WHOIS lookup result, as returned by a [`WhoisSource`](super::WhoisSource).
///
/// Registries may report a date more than once (e.g. several creation
/// timestamps); every value is kept here and the report uses the first. Dates
/// keep the offset the registry reported them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisResult {
    /// Registrar name
    pub registrar: Option<String>,
    /// Domain creation dates
    pub creation_dates: Vec<DateTime<FixedOffset>>,
    /// Domain expiration dates
    pub expiration_dates: Vec<DateTime<FixedOffset>>,
    /// Domain updated dates
    pub updated_dates: Vec<DateTime<FixedOffset>>,
    /// Nameservers from WHOIS
    pub nameservers: Vec<String>,
    /// Domain status (e.g., "clientTransferProhibited")
    pub status: Vec<String>,
}
