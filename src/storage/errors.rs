use std::error::Error as StdError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::Path;

use thiserror::Error;

use crate::random::GenerationError;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StorageErrorKind {
    DirectoryCreate,
    FileCreate,
    NotFound,
    NotReadable,
    Open,
    HeaderRead,
    Read,
    NotWritable,
    Write
}

impl Display for StorageErrorKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let message = match self {
            StorageErrorKind::DirectoryCreate => "Failed to create directory",
            StorageErrorKind::FileCreate => "Failed to create CSV file",
            StorageErrorKind::NotFound => "CSV file does not exist at path",
            StorageErrorKind::NotReadable => "CSV file is not readable at path",
            StorageErrorKind::Open => "Failed to open CSV file",
            StorageErrorKind::HeaderRead => "Failed to read headers from CSV file",
            StorageErrorKind::Read => "Error reading from CSV file",
            StorageErrorKind::NotWritable => "Directory is not writable",
            StorageErrorKind::Write => "Failed to write row to CSV file"
        };

        formatter.write_str(message)
    }
}

/// Any failure of the ledger file or its directory.
///
/// The detail and cause carry paths and OS messages; they are meant for logs,
/// not for end users.
#[derive(Debug, Error)]
#[error("{kind}: {detail}")]
pub struct StorageError {
    kind: StorageErrorKind,
    detail: String,
    #[source]
    source: Option<BoxError>
}

impl StorageError {
    pub fn new(kind: StorageErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            source: None
        }
    }

    pub fn at_path(kind: StorageErrorKind, path: &Path) -> Self {
        Self::new(kind, path.display().to_string())
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }
}

/// Failure of a ledger operation that may involve both status generation and storage.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Generation(#[from] GenerationError)
}

impl LedgerError {
    /// Generic label that is safe to hand to an end caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            LedgerError::Storage(_) => "Storage error",
            LedgerError::Generation(_) => "Service error"
        }
    }
}
