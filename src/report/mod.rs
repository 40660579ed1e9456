//! Report aggregation.
//!
//! Every processed domain becomes one [`DomainRecord`]: an open-ended map from
//! field name to value. The set of field names is not known up front (the ANY
//! query can surface record types nobody asked for), so the aggregator keeps a
//! [`FieldUniverse`] of every name seen so far and derives the CSV columns from
//! it once the run is over.

mod types;

pub use types::{DomainRecord, FieldUniverse, Fields, ReportDocument};

/// Accumulates rows and discovered field names for one run.
#[derive(Debug, Default)]
pub struct ReportAggregator {
    fields: FieldUniverse,
    document: ReportDocument,
}

/// Column order plus rows, ready to be written.
#[derive(Debug, Clone)]
pub struct FinalizedReport {
    /// Base fields first, then every other discovered field in lexicographic order
    pub columns: Vec<String>,
    /// Rows in input order
    pub rows: Vec<DomainRecord>,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combines the WHOIS and DNS results for `domain` into one row.
    ///
    /// Shallow union; on a key collision the DNS value wins. The only key both
    /// sides can produce is `error`, so a DNS failure replaces a WHOIS failure
    /// message when both lookups fail.
    pub fn merge(domain: &str, whois: Fields, dns: Fields) -> DomainRecord {
        let mut record = DomainRecord::new(domain);
        record.extend(whois);
        record.extend(dns);
        record
    }

    /// Adds a row to the document and its keys to the field universe.
    pub fn record(&mut self, record: DomainRecord) {
        self.fields.observe(&record);
        self.document.push(record);
    }

    /// Number of rows recorded so far.
    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    pub fn fields(&self) -> &FieldUniverse {
        &self.fields
    }

    /// Consumes the aggregator, fixing the column order.
    pub fn finalize(self) -> FinalizedReport {
        FinalizedReport {
            columns: self.fields.column_order(),
            rows: self.document.into_rows(),
        }
    }
}
