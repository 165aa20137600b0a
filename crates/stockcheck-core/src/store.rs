//! CSV diagnosis log.
//!
//! The log is a flat UTF-8 CSV file with a byte-order mark, a header row and
//! one row per diagnosis. It is created on the first append, appended to
//! afterwards and only ever removed as a whole.
//!
//! There is no locking. Two processes appending at the same time may
//! interleave rows, and two processes creating the file at the same time may
//! both write a header. The log is meant for a single local user.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::StoreError;
use crate::record::DiagnosisRecord;

/// File name used when no other location is configured.
pub const DEFAULT_LOG_FILE: &str = "stock_diagnosis_history.csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Whether the log exists, and its rows if it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogState {
    Absent,
    Present(Vec<DiagnosisRecord>),
}

impl LogState {
    /// Rows in insertion order; empty when absent.
    pub fn into_records(self) -> Vec<DiagnosisRecord> {
        match self {
            LogState::Absent => Vec::new(),
            LogState::Present(records) => records,
        }
    }
}

/// Append-only CSV store for diagnosis records.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Append one record, creating the file with a BOM and header row if it
    /// does not exist yet (or is empty).
    pub fn append(&self, record: &DiagnosisRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        let fresh = file.metadata().map_err(|e| self.io_error(e))?.len() == 0;

        if fresh {
            file.write_all(UTF8_BOM).map_err(|e| self.io_error(e))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(fresh)
            .from_writer(file);
        writer.serialize(record).map_err(|e| self.csv_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;

        if fresh {
            info!(path = %self.path.display(), "created diagnosis log");
        }
        debug!(
            stock = %record.stock_name,
            score = record.score,
            grade = %record.grade,
            "appended diagnosis"
        );
        Ok(())
    }

    /// Read every row in insertion order.
    pub fn read(&self) -> Result<LogState, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LogState::Absent),
            Err(e) => return Err(self.io_error(e)),
        };
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(body);
        let records = reader
            .deserialize::<DiagnosisRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.csv_error(e))?;

        debug!(path = %self.path.display(), rows = records.len(), "read diagnosis log");
        Ok(LogState::Present(records))
    }

    /// Read every row, treating an absent log as empty.
    pub fn read_all(&self) -> Result<Vec<DiagnosisRecord>, StoreError> {
        Ok(self.read()?.into_records())
    }

    /// Remove the log file. Returns `false` if there was nothing to remove.
    pub fn delete_all(&self) -> Result<bool, StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "deleted diagnosis log");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}
