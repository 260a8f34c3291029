//! Persistence error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by the snapshot store or the history log.
///
/// A *missing* file is not an error for the contracts that say so
/// (`SnapshotStore::load` falls back to catalog defaults,
/// `HistoryLog::load` returns an empty history); these variants cover IO
/// failures and present-but-unreadable data, which must be surfaced rather
/// than silently discarded.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot document at {path}: {source}")]
    MalformedSnapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed history row at {path} line {line}: {reason}")]
    MalformedHistory {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
