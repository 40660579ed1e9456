//! WHOIS data parsing and conversion.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use whois_service::WhoisResponse;

use super::types::WhoisResult;
use crate::error_handling::WhoisLookupError;

/// Converts whois-service ParsedWhoisData to our WhoisResult
pub(crate) fn convert_parsed_data(
    domain: &str,
    response: &WhoisResponse,
) -> Result<WhoisResult, WhoisLookupError> {
    let parsed = response
        .parsed_data
        .as_ref()
        .ok_or_else(|| WhoisLookupError::NoParsedData(domain.to_string()))?;

    Ok(WhoisResult {
        registrar: parsed
            .registrar
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string),
        creation_dates: parse_dates(parsed.creation_date.as_deref()),
        expiration_dates: parse_dates(parsed.expiration_date.as_deref()),
        updated_dates: parse_dates(parsed.updated_date.as_deref()),
        nameservers: non_empty(&parsed.name_servers),
        status: non_empty(&parsed.status),
    })
}

fn non_empty(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a raw registry date field.
///
/// whois-service keeps the first value a registry reports for a field, verbatim.
/// The date keeps the offset the registry wrote it in, so the report shows the
/// registry's calendar day. A value that does not parse is treated as missing.
pub(crate) fn parse_dates(raw: Option<&str>) -> Vec<DateTime<FixedOffset>> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(parse_date_string)
        .into_iter()
        .collect()
}

/// Attempts to parse a date string in various formats
fn parse_date_string(date_str: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt);
    }

    // Try common WHOIS date formats; day-first before month-first
    let formats = [
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d %b %Y",
        "%Y/%m/%d",
        "%d/%m/%Y",
        "%m/%d/%Y",
        "%d.%m.%Y",
    ];

    for format in &formats {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt);
        }
        if let Ok(naive_dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc().fixed_offset());
        }
        if let Ok(naive_date) = NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
        }
    }

    None
}

// convert_parsed_data needs a full WhoisResponse from whois-service, whose layout
// is not ours to pin down; the date handling below is where the logic lives.
