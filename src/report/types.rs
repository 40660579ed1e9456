//! Report data structures.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{BASE_FIELDS, FIELD_DOMAIN, FIELD_ERROR};

/// Field name to value, as produced by a single lookup.
pub type Fields = BTreeMap<String, String>;

/// One row of the report.
///
/// Always carries a `domain` field; `error` may sit next to WHOIS or DNS data
/// when only one of the lookups failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainRecord {
    fields: Fields,
}

impl DomainRecord {
    pub fn new(domain: &str) -> Self {
        let mut fields = Fields::new();
        fields.insert(FIELD_DOMAIN.to_string(), domain.to_string());
        Self { fields }
    }

    pub fn domain(&self) -> &str {
        self.get(FIELD_DOMAIN).unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.get(FIELD_ERROR)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Inserts or overwrites a field. `domain` cannot be overwritten.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        if field == FIELD_DOMAIN {
            return;
        }
        self.fields.insert(field, value.into());
    }

    /// Merges `other` into this row, later values winning.
    pub fn extend(&mut self, other: Fields) {
        for (field, value) in other {
            self.insert(field, value);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

/// Every field name observed during a run. Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct FieldUniverse {
    names: BTreeSet<String>,
}

impl FieldUniverse {
    pub fn observe(&mut self, record: &DomainRecord) {
        for key in record.keys() {
            if !self.names.contains(key) {
                self.names.insert(key.to_string());
            }
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.names.contains(field)
    }

    /// Final CSV columns: [`BASE_FIELDS`] in their fixed order (present even if
    /// never observed), then the remaining names sorted lexicographically.
    pub fn column_order(&self) -> Vec<String> {
        let mut columns: Vec<String> = BASE_FIELDS.iter().map(|f| (*f).to_string()).collect();
        // BTreeSet iterates in sorted order
        columns.extend(
            self.names
                .iter()
                .filter(|name| !BASE_FIELDS.contains(&name.as_str()))
                .cloned(),
        );
        columns
    }
}

/// Rows in input order. Append-only.
#[derive(Debug, Clone, Default)]
pub struct ReportDocument {
    rows: Vec<DomainRecord>,
}

impl ReportDocument {
    pub fn push(&mut self, record: DomainRecord) {
        self.rows.push(record);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<DomainRecord> {
        self.rows
    }
}
