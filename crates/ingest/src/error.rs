//! Run-level ingest failures.

use thiserror::Error;

/// A structural problem with supplied input. Any of these aborts the whole
/// pass; per-pair forecasting outcomes are never reported through here.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{table} table is missing required columns: {}", .missing.join(", "))]
    MissingColumns {
        table: &'static str,
        missing: Vec<String>,
    },

    #[error("malformed {table} row {line}: {reason}")]
    MalformedRow {
        table: &'static str,
        line: usize,
        reason: String,
    },

    #[error("{table} table could not be read: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("source unavailable: {0}")]
    Unsupported(String),
}
