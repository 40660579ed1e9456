//! Configuration constants.
//!
//! This module defines the constants used as defaults throughout the application:
//! lookup timeouts, the rate-limit delay, the record types queried for every
//! domain, and the fixed leading columns of the CSV report.

use hickory_resolver::proto::rr::RecordType;

/// Default delay between two consecutive domains, in seconds.
///
/// WHOIS servers rate-limit aggressively; 5s keeps a long list from being
/// throttled halfway through. Overridable with the third CLI argument.
pub const DEFAULT_DELAY_SECS: u64 = 5;

// Network operation timeouts
/// DNS query timeout in seconds (per attempt)
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Total time budget for a single DNS query in seconds, including the resolver's
/// own attempts
pub const DNS_LIFETIME_SECS: u64 = 5;
/// Number of attempts the resolver makes per query (no retries)
pub const DNS_ATTEMPTS: usize = 1;
/// Upper bound on a single WHOIS/RDAP lookup in seconds.
///
/// whois-service carries its own internal timeouts (up to 30s); this caps the
/// client so one unresponsive registry cannot stall the whole run.
pub const WHOIS_TIMEOUT_SECS: u64 = 30;

/// Record types queried individually for every domain, after the ANY query.
pub const DEFAULT_RECORD_TYPES: [RecordType; 9] = [
    RecordType::A,
    RecordType::AAAA,
    RecordType::MX,
    RecordType::NS,
    RecordType::TXT,
    RecordType::SOA,
    RecordType::CNAME,
    RecordType::SRV,
    RecordType::PTR,
];

/// Leading CSV columns, always present and always in this order.
/// Every other discovered field follows in lexicographic order.
pub const BASE_FIELDS: [&str; 8] = [
    FIELD_DOMAIN,
    FIELD_REGISTRAR,
    FIELD_CREATED,
    FIELD_EXPIRES,
    FIELD_NAMESERVERS,
    FIELD_STATUS,
    FIELD_UPDATED,
    FIELD_ERROR,
];

// Report field names
pub const FIELD_DOMAIN: &str = "domain";
pub const FIELD_REGISTRAR: &str = "registrar";
pub const FIELD_CREATED: &str = "created";
pub const FIELD_EXPIRES: &str = "expires";
pub const FIELD_NAMESERVERS: &str = "nameservers";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_UPDATED: &str = "updated";
pub const FIELD_ERROR: &str = "error";

/// Placeholder for a WHOIS sub-field the registry did not return
pub const NOT_AVAILABLE: &str = "N/A";
/// Separator used when a field holds several values (nameservers, DNS records)
pub const VALUE_SEPARATOR: &str = "; ";
/// Date format used for `created`, `expires` and `updated`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Error markers written into the `error` column
pub const WHOIS_ERROR_PREFIX: &str = "WHOIS Error: ";
pub const DNS_ERROR_PREFIX: &str = "DNS Error: ";
pub const DNS_NXDOMAIN: &str = "NXDOMAIN";
pub const DNS_SERVER_ERROR: &str = "DNS Server Error";

/// Usage example printed alongside argument errors
pub const USAGE_EXAMPLE: &str = "Example: domain_audit domains.txt report.csv 5";
