//! Per-domain record collection (ANY pass followed by per-type queries).

use std::collections::BTreeMap;

use hickory_resolver::proto::rr::RecordType;

use super::DnsBackend;
use crate::config::{DNS_ERROR_PREFIX, DNS_NXDOMAIN, DNS_SERVER_ERROR, FIELD_ERROR, VALUE_SEPARATOR};
use crate::error_handling::DnsQueryError;
use crate::report::Fields;

/// Collects DNS records for a domain into report fields.
///
/// Keys are record type names (`A`, `MX`, ...) and values are the records joined
/// with `; `. Outcomes of the ANY query:
/// - NXDOMAIN: the result is exactly `error = NXDOMAIN`
/// - server failure: `error = DNS Server Error`, and the per-type queries still
///   run; the error is kept next to whatever they find
/// - timeout or other resolver error: `error = DNS Error: ...`, nothing else
///
/// Per-type queries overwrite what the ANY pass found for that type. A per-type
/// failure of any kind leaves that type alone.
pub async fn lookup_dns(
    backend: &dyn DnsBackend,
    domain: &str,
    record_types: &[RecordType],
) -> Fields {
    let mut records: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut error: Option<String> = None;

    match backend.query(domain, RecordType::ANY).await {
        Ok(answers) => {
            for answer in answers {
                let values = records.entry(answer.record_type.to_string()).or_default();
                if !values.contains(&answer.value) {
                    values.push(answer.value);
                }
            }
        }
        Err(DnsQueryError::NoRecords) => {}
        Err(DnsQueryError::NxDomain) => {
            log::info!("{} does not exist (NXDOMAIN)", domain);
            return error_only(DNS_NXDOMAIN.to_string());
        }
        Err(DnsQueryError::ServerFailure(msg)) => {
            log::warn!("ANY query for {} failed at the server: {}", domain, msg);
            error = Some(DNS_SERVER_ERROR.to_string());
        }
        Err(e) => {
            log::warn!("ANY query for {} failed: {}", domain, e);
            return error_only(format!("{DNS_ERROR_PREFIX}{e}"));
        }
    }

    for &record_type in record_types {
        match backend.query(domain, record_type).await {
            Ok(answers) => {
                let values: Vec<String> = answers
                    .into_iter()
                    .filter(|a| a.record_type == record_type)
                    .map(|a| a.value)
                    .collect();
                if values.is_empty() {
                    continue;
                }
                records.insert(record_type.to_string(), values);
            }
            Err(DnsQueryError::NoRecords | DnsQueryError::NxDomain) => {}
            Err(e) => {
                log::debug!("{} lookup for {} failed: {}", record_type, domain, e);
            }
        }
    }

    let mut fields: Fields = records
        .into_iter()
        .map(|(record_type, values)| (record_type, values.join(VALUE_SEPARATOR)))
        .collect();
    if let Some(error) = error {
        fields.insert(FIELD_ERROR.to_string(), error);
    }
    fields
}

fn error_only(message: String) -> Fields {
    let mut fields = Fields::new();
    fields.insert(FIELD_ERROR.to_string(), message);
    fields
}
