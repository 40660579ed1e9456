//! DNS module tests.
//!
//! The record collection logic runs against a scripted backend; no query
//! leaves the process.

use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::{Message, MessageType, ResponseCode};
use hickory_resolver::proto::rr::rdata::{A, TXT};
use hickory_resolver::proto::rr::{Name, RData, Record, RecordType};
use hickory_resolver::proto::serialize::binary::BinEncodable;
use hickory_resolver::TokioAsyncResolver;
use tokio::net::UdpSocket;

use super::resolution::{absolute_name, record_text};
use super::*;
use crate::config::DEFAULT_RECORD_TYPES;
use crate::initialization::resolver_opts;

/// Backend answering from a fixed table. Types missing from the table answer
/// `NoRecords`. Every query is logged so tests can check what was asked.
#[derive(Default)]
struct ScriptedBackend {
    answers: HashMap<RecordType, Result<Vec<DnsAnswer>, DnsQueryError>>,
    queried: Mutex<Vec<RecordType>>,
}

impl ScriptedBackend {
    fn with(mut self, record_type: RecordType, result: Result<Vec<DnsAnswer>, DnsQueryError>) -> Self {
        self.answers.insert(record_type, result);
        self
    }

    fn queried(&self) -> Vec<RecordType> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsBackend for ScriptedBackend {
    async fn query(
        &self,
        _domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DnsQueryError> {
        self.queried.lock().unwrap().push(record_type);
        self.answers
            .get(&record_type)
            .cloned()
            .unwrap_or(Err(DnsQueryError::NoRecords))
    }
}

fn answer(record_type: RecordType, value: &str) -> DnsAnswer {
    DnsAnswer::new(record_type, value)
}

#[tokio::test]
async fn test_per_type_records_joined_with_semicolon() {
    let backend = ScriptedBackend::default()
        .with(
            RecordType::A,
            Ok(vec![answer(RecordType::A, "192.0.2.1"), answer(RecordType::A, "192.0.2.2")]),
        )
        .with(
            RecordType::MX,
            Ok(vec![answer(RecordType::MX, "10 mx1.example.com.")]),
        );

    let fields = lookup_dns(&backend, "example.com", &DEFAULT_RECORD_TYPES).await;

    assert_eq!(fields["A"], "192.0.2.1; 192.0.2.2");
    assert_eq!(fields["MX"], "10 mx1.example.com.");
    assert_eq!(fields.len(), 2);
}

#[tokio::test]
async fn test_any_query_runs_first_then_every_type() {
    let backend = ScriptedBackend::default();

    let fields = lookup_dns(&backend, "example.com", &DEFAULT_RECORD_TYPES).await;

    assert!(fields.is_empty());
    let mut expected = vec![RecordType::ANY];
    expected.extend(DEFAULT_RECORD_TYPES);
    assert_eq!(backend.queried(), expected);
}

#[tokio::test]
async fn test_any_query_discovers_extra_types() {
    let backend = ScriptedBackend::default().with(
        RecordType::ANY,
        Ok(vec![
            answer(RecordType::HINFO, "\"RFC8482\" \"\""),
            answer(RecordType::CAA, "0 issue \"letsencrypt.org\""),
            answer(RecordType::CAA, "0 issue \"letsencrypt.org\""),
            answer(RecordType::CAA, "0 iodef \"mailto:sec@example.com\""),
        ]),
    );

    let fields = lookup_dns(&backend, "example.com", &DEFAULT_RECORD_TYPES).await;

    assert_eq!(fields["HINFO"], "\"RFC8482\" \"\"");
    // duplicates from the ANY answer are collapsed
    assert_eq!(
        fields["CAA"],
        "0 issue \"letsencrypt.org\"; 0 iodef \"mailto:sec@example.com\""
    );
}

#[tokio::test]
async fn test_per_type_answer_overwrites_any_answer() {
    let backend = ScriptedBackend::default()
        .with(
            RecordType::ANY,
            Ok(vec![
                answer(RecordType::A, "198.51.100.7"),
                answer(RecordType::TXT, "\"from any\""),
            ]),
        )
        .with(RecordType::A, Ok(vec![answer(RecordType::A, "192.0.2.1")]));

    let fields = lookup_dns(&backend, "example.com", &DEFAULT_RECORD_TYPES).await;

    assert_eq!(fields["A"], "192.0.2.1");
    // TXT query answered NoRecords, so the ANY value survives
    assert_eq!(fields["TXT"], "\"from any\"");
}

#[tokio::test]
async fn test_nxdomain_on_any_short_circuits() {
    let backend = ScriptedBackend::default()
        .with(RecordType::ANY, Err(DnsQueryError::NxDomain))
        .with(RecordType::A, Ok(vec![answer(RecordType::A, "192.0.2.1")]));

    let fields = lookup_dns(&backend, "bad.invalid", &DEFAULT_RECORD_TYPES).await;

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["error"], "NXDOMAIN");
    assert_eq!(backend.queried(), vec![RecordType::ANY]);
}

#[tokio::test]
async fn test_server_failure_keeps_per_type_records() {
    let backend = ScriptedBackend::default()
        .with(
            RecordType::ANY,
            Err(DnsQueryError::ServerFailure("SERVFAIL".into())),
        )
        .with(RecordType::A, Ok(vec![answer(RecordType::A, "192.0.2.1")]))
        .with(RecordType::NS, Ok(vec![answer(RecordType::NS, "ns1.example.com.")]));

    let fields = lookup_dns(&backend, "example.com", &DEFAULT_RECORD_TYPES).await;

    assert_eq!(fields["error"], "DNS Server Error");
    assert_eq!(fields["A"], "192.0.2.1");
    assert_eq!(fields["NS"], "ns1.example.com.");
    assert_eq!(backend.queried().len(), 1 + DEFAULT_RECORD_TYPES.len());
}

#[tokio::test]
async fn test_other_any_failure_short_circuits_with_message() {
    let backend = ScriptedBackend::default()
        .with(RecordType::ANY, Err(DnsQueryError::Timeout))
        .with(RecordType::A, Ok(vec![answer(RecordType::A, "192.0.2.1")]));

    let fields = lookup_dns(&backend, "slow.example", &DEFAULT_RECORD_TYPES).await;

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["error"], "DNS Error: query timed out");
}

#[tokio::test]
async fn test_per_type_failures_are_swallowed() {
    let backend = ScriptedBackend::default()
        .with(RecordType::A, Err(DnsQueryError::Timeout))
        .with(RecordType::AAAA, Err(DnsQueryError::Other("io error".into())))
        .with(
            RecordType::MX,
            Err(DnsQueryError::ServerFailure("REFUSED".into())),
        )
        .with(RecordType::TXT, Err(DnsQueryError::NxDomain))
        .with(RecordType::NS, Ok(vec![answer(RecordType::NS, "ns.example.com.")]));

    let fields = lookup_dns(&backend, "example.com", &DEFAULT_RECORD_TYPES).await;

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["NS"], "ns.example.com.");
    assert!(!fields.contains_key("error"));
}

#[tokio::test]
async fn test_per_type_ignores_records_of_other_types() {
    // A query against an alias returns the CNAME chain alongside the A records
    let backend = ScriptedBackend::default()
        .with(
            RecordType::A,
            Ok(vec![
                answer(RecordType::CNAME, "target.example.net."),
                answer(RecordType::A, "203.0.113.9"),
            ]),
        )
        .with(
            RecordType::AAAA,
            Ok(vec![answer(RecordType::CNAME, "target.example.net.")]),
        );

    let fields = lookup_dns(&backend, "www.example.com", &DEFAULT_RECORD_TYPES).await;

    assert_eq!(fields["A"], "203.0.113.9");
    assert!(!fields.contains_key("AAAA"));
    assert!(!fields.contains_key("CNAME"));
}

#[tokio::test]
async fn test_custom_record_type_list() {
    let backend = ScriptedBackend::default();
    lookup_dns(&backend, "example.com", &[RecordType::A, RecordType::CAA]).await;
    assert_eq!(
        backend.queried(),
        vec![RecordType::ANY, RecordType::A, RecordType::CAA]
    );
}

#[test]
fn test_classify_timeout() {
    let err = ResolveError::from(ResolveErrorKind::Timeout);
    assert_eq!(classify_resolve_error(&err), DnsQueryError::Timeout);
}

#[test]
fn test_classify_no_connections_is_server_failure() {
    let err = ResolveError::from(ResolveErrorKind::NoConnections);
    assert!(matches!(
        classify_resolve_error(&err),
        DnsQueryError::ServerFailure(_)
    ));
}

#[test]
fn test_classify_other_keeps_message() {
    let err = ResolveError::from(ResolveErrorKind::Message("malformed response"));
    assert_eq!(
        classify_resolve_error(&err),
        DnsQueryError::Other("malformed response".to_string())
    );
}

#[test]
fn test_txt_strings_are_quoted_one_by_one() {
    let txt = TXT::new(vec!["v=spf1 -all".to_string(), "say \"hi\"".to_string()]);
    assert_eq!(
        record_text(&RData::TXT(txt)),
        r#""v=spf1 -all" "say \"hi\"""#
    );
}

#[test]
fn test_txt_non_printable_bytes_are_escaped() {
    let txt = TXT::from_bytes(vec![b"a\\b\x01".as_slice()]);
    assert_eq!(record_text(&RData::TXT(txt)), r#""a\\b\001""#);
}

#[test]
fn test_other_records_use_presentation_format() {
    let data = RData::A(A::from(Ipv4Addr::new(192, 0, 2, 1)));
    assert_eq!(record_text(&data), "192.0.2.1");
}

#[test]
fn test_query_names_are_absolute() {
    let name = absolute_name("example.com").expect("valid name");
    assert!(name.is_fqdn());
    assert_eq!(name.to_ascii(), "example.com.");
    assert!(absolute_name("example.com.").expect("valid name").is_fqdn());
}

/// Local nameserver: `A 192.0.2.1` for example.com, an empty NOERROR answer for
/// its other types, NXDOMAIN for every other name.
async fn spawn_nameserver() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.expect("bind nameserver");
    let addr = socket.local_addr().expect("nameserver address");
    tokio::spawn(async move {
        let mut buf = [0u8; 4096];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            let Ok(request) = Message::from_vec(&buf[..len]) else {
                continue;
            };

            let mut response = Message::new();
            response
                .set_id(request.id())
                .set_message_type(MessageType::Response)
                .set_op_code(request.op_code())
                .set_recursion_desired(request.recursion_desired())
                .set_recursion_available(true);
            response.add_queries(request.queries().to_vec());

            match request.queries().first() {
                Some(query) if query.name().to_ascii().eq_ignore_ascii_case("example.com.") => {
                    if query.query_type() == RecordType::A {
                        response.add_answer(Record::from_rdata(
                            query.name().clone(),
                            300,
                            RData::A(A::from(Ipv4Addr::new(192, 0, 2, 1))),
                        ));
                    }
                }
                _ => {
                    response.set_response_code(ResponseCode::NXDomain);
                }
            }

            if let Ok(bytes) = response.to_bytes() {
                let _ = socket.send_to(&bytes, peer).await;
            }
        }
    });
    addr
}

#[tokio::test]
async fn test_search_domains_never_applied_to_input_domains() {
    let addr = spawn_nameserver().await;
    let search = Name::from_ascii("corp.test.").expect("search domain");
    let config = ResolverConfig::from_parts(
        Some(search.clone()),
        vec![search],
        NameServerConfigGroup::from_ips_clear(&[addr.ip()], addr.port(), true),
    );
    let backend = HickoryBackend::new(
        TokioAsyncResolver::tokio(config, resolver_opts()),
        Duration::from_secs(5),
    );

    // The ANY answer is empty; retrying as example.com.corp.test would hit NXDOMAIN
    let fields = lookup_dns(&backend, "example.com", &DEFAULT_RECORD_TYPES).await;

    assert_eq!(fields.get("A").map(String::as_str), Some("192.0.2.1"));
    assert!(!fields.contains_key("error"), "unexpected error: {fields:?}");
}
