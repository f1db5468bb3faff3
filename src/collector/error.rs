//! Error type shared by all readers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single telemetry read.
///
/// Every reader surfaces its own failure to the caller; none of them
/// terminate the process.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The source file or directory could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A fixed-layout record was missing fields or held non-numeric values.
    #[error("malformed record in {}: {reason}", .path.display())]
    MalformedRecord { path: PathBuf, reason: String },

    /// The labeled line was not present anywhere in the source.
    #[error("counter '{label}' not found in {}", .path.display())]
    CounterNotFound { label: &'static str, path: PathBuf },

    /// A system call returned an error.
    #[error("{call}() failed: {source}")]
    QueryFailed {
        call: &'static str,
        #[source]
        source: io::Error,
    },
}

impl CollectError {
    /// Short, stable name of the error kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            CollectError::SourceUnavailable { .. } => "source_unavailable",
            CollectError::MalformedRecord { .. } => "malformed_record",
            CollectError::CounterNotFound { .. } => "counter_not_found",
            CollectError::QueryFailed { .. } => "query_failed",
        }
    }
}
