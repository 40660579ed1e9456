//! Domain list loading.

use std::path::Path;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error_handling::AuditError;

/// Reads the domain list: one domain per line, surrounding whitespace trimmed,
/// blank lines dropped. Order and duplicates are kept.
///
/// # Errors
///
/// Returns `AuditError::InputFileMissing` if `path` does not exist, and
/// `AuditError::InputRead` if it cannot be read as UTF-8 text.
pub async fn read_domains(path: &Path) -> Result<Vec<String>, AuditError> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(AuditError::InputFileMissing(path.to_path_buf()));
    }

    let read_error = |source: std::io::Error| AuditError::InputRead {
        path: path.to_path_buf(),
        source,
    };

    let file = tokio::fs::File::open(path).await.map_err(read_error)?;
    let mut lines = BufReader::new(file).lines();
    let mut domains = Vec::new();
    while let Some(line) = lines.next_line().await.map_err(read_error)? {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            domains.push(trimmed.to_string());
        }
    }

    log::info!("Total domains in {}: {}", path.display(), domains.len());
    Ok(domains)
}
