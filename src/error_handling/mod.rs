//! Error handling.
//!
//! Error types are split by how far they propagate:
//! - **Lookup errors** (`WhoisLookupError`, `DnsQueryError`): recorded as data in
//!   the domain's row, the run continues
//! - **Run errors** (`AuditError`, `InitializationError`): abort the run before or
//!   instead of writing the report

mod types;

// Re-export public API
pub use types::{AuditError, DnsQueryError, InitializationError, WhoisLookupError};
