//! hickory-resolver backed DNS queries.

use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{Name, RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::{DnsAnswer, DnsBackend};
use crate::error_handling::DnsQueryError;

/// Live DNS backend.
///
/// Every query gets a hard `lifetime` budget on top of the resolver's own
/// per-attempt timeout.
pub struct HickoryBackend {
    resolver: TokioAsyncResolver,
    lifetime: Duration,
}

impl HickoryBackend {
    pub fn new(resolver: TokioAsyncResolver, lifetime: Duration) -> Self {
        Self { resolver, lifetime }
    }
}

#[async_trait]
impl DnsBackend for HickoryBackend {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DnsQueryError> {
        let name = absolute_name(domain)?;
        let lookup = tokio::time::timeout(self.lifetime, self.resolver.lookup(name, record_type))
            .await
            .map_err(|_| DnsQueryError::Timeout)?
            .map_err(|e| classify_resolve_error(&e))?;

        let answers: Vec<DnsAnswer> = lookup
            .record_iter()
            .filter_map(|record| {
                record
                    .data()
                    .map(|data| DnsAnswer::new(record.record_type(), record_text(data)))
            })
            .collect();

        if answers.is_empty() {
            return Err(DnsQueryError::NoRecords);
        }
        Ok(answers)
    }
}

/// Parses `domain` as a fully qualified name.
///
/// hickory appends the host's `search` and `domain` suffixes to any relative
/// name and retries with them when the bare name comes back empty; an input
/// domain is always absolute.
pub(crate) fn absolute_name(domain: &str) -> Result<Name, DnsQueryError> {
    let mut name = Name::from_utf8(domain).map_err(|e| DnsQueryError::Other(e.to_string()))?;
    name.set_fqdn(true);
    Ok(name)
}

/// Presentation text for one record.
///
/// TXT strings are quoted and escaped one by one, space separated; every other
/// type uses hickory's own presentation format.
pub(crate) fn record_text(data: &RData) -> String {
    match data {
        RData::TXT(txt) => txt
            .txt_data()
            .iter()
            .map(|chunk| quote_character_string(chunk))
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}

fn quote_character_string(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len() + 2);
    text.push('"');
    for &byte in bytes {
        match byte {
            b'"' | b'\\' => {
                text.push('\\');
                text.push(char::from(byte));
            }
            0x20..=0x7e => text.push(char::from(byte)),
            _ => text.push_str(&format!("\\{byte:03}")),
        }
    }
    text.push('"');
    text
}

/// Maps a resolver error onto the outcomes the report distinguishes.
///
/// An empty answer carries the response code: `NXDOMAIN` means the name does
/// not exist, `NOERROR` means the type is simply absent, anything else
/// (`SERVFAIL`, `REFUSED`, `NOTIMP`, ...) is a server-side failure.
pub fn classify_resolve_error(error: &ResolveError) -> DnsQueryError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NXDomain => DnsQueryError::NxDomain,
            ResponseCode::NoError => DnsQueryError::NoRecords,
            code => DnsQueryError::ServerFailure(code.to_string()),
        },
        ResolveErrorKind::NoConnections => DnsQueryError::ServerFailure(error.to_string()),
        ResolveErrorKind::Timeout => DnsQueryError::Timeout,
        _ => DnsQueryError::Other(error.to_string()),
    }
}
