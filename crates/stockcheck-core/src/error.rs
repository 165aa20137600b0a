//! Error types for diagnosis submission and log storage.
//!
//! Validation failures are kept apart from storage failures so the CLI can
//! report a rejected submission without treating it as an I/O problem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while submitting a diagnosis.
#[derive(Debug, Error)]
pub enum DiagnosisError {
    /// The stock name was empty or whitespace only. Nothing is written.
    #[error("stock name must not be empty")]
    EmptyStockName,

    /// An answer referred to a question id that is not in the checklist.
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    /// The record was valid but could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DiagnosisError {
    /// Returns `true` if the error was caused by user input rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DiagnosisError::EmptyStockName | DiagnosisError::UnknownQuestion(_)
        )
    }
}

/// Errors raised by the CSV diagnosis log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening, creating, reading or removing the log file failed.
    #[error("log file I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be encoded or decoded.
    #[error("malformed diagnosis log {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
