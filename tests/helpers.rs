#![allow(dead_code)]

// Shared test doubles for the WHOIS and DNS capabilities.
//
// Nothing here touches the network: every answer comes from a table filled in
// by the test.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use hickory_resolver::proto::rr::RecordType;

use domain_audit::{
    DnsAnswer, DnsBackend, DnsQueryError, WhoisLookupError, WhoisResult, WhoisSource,
};

/// WHOIS source answering from a per-domain table. Unknown domains fail with an
/// unsupported-TLD style client error.
#[derive(Default)]
pub struct FakeWhois {
    answers: HashMap<String, Result<WhoisResult, WhoisLookupError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeWhois {
    pub fn with(mut self, domain: &str, result: Result<WhoisResult, WhoisLookupError>) -> Self {
        self.answers.insert(domain.to_string(), result);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WhoisSource for FakeWhois {
    async fn query(&self, domain: &str) -> Result<WhoisResult, WhoisLookupError> {
        self.calls.lock().unwrap().push(domain.to_string());
        self.answers.get(domain).cloned().unwrap_or_else(|| {
            Err(WhoisLookupError::Client(format!(
                "No whois server known for {domain}"
            )))
        })
    }
}

/// DNS backend answering from a (domain, type) table. Missing entries answer
/// `NoRecords`.
#[derive(Default)]
pub struct FakeDns {
    answers: HashMap<(String, RecordType), Result<Vec<DnsAnswer>, DnsQueryError>>,
    calls: Mutex<usize>,
}

impl FakeDns {
    pub fn with(
        mut self,
        domain: &str,
        record_type: RecordType,
        result: Result<Vec<DnsAnswer>, DnsQueryError>,
    ) -> Self {
        self.answers
            .insert((domain.to_string(), record_type), result);
        self
    }

    /// Shorthand for a successful answer of `record_type` with `values`.
    pub fn records(self, domain: &str, record_type: RecordType, values: &[&str]) -> Self {
        let answers = values
            .iter()
            .map(|v| DnsAnswer::new(record_type, *v))
            .collect();
        self.with(domain, record_type, Ok(answers))
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl DnsBackend for FakeDns {
    async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsAnswer>, DnsQueryError> {
        *self.calls.lock().unwrap() += 1;
        self.answers
            .get(&(domain.to_string(), record_type))
            .cloned()
            .unwrap_or(Err(DnsQueryError::NoRecords))
    }
}

/// Writes `contents` to `name` inside `dir` and returns the path.
pub fn write_input(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write input file");
    path
}
