use std::fs::{create_dir_all, metadata, remove_file, File, OpenOptions};
use std::io;
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::from_utf8;

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::{debug, info, warn};

use crate::models::{LedgerRow, NewTransaction, TransactionRecord};
use crate::random::{StatusGenerator, StatusSource};
use crate::storage::{LedgerError, StorageError, StorageErrorKind, TransactionStorage};
use crate::types::LEDGER_HEADERS;

/// Transaction ledger kept in a single CSV file.
///
/// The file always starts with the [`LEDGER_HEADERS`] line. Each call opens the
/// file, performs one read or one append and closes it again.
pub struct CsvLedger<S: StatusSource = StatusGenerator> {
    path: PathBuf,
    status_source: S
}

impl<S: StatusSource> CsvLedger<S> {
    /// Opens the ledger at `path`, creating its directory and header line when missing.
    ///
    /// # Errors
    /// Returns `StorageError` of kind `DirectoryCreate` or `FileCreate` when the
    /// ledger cannot be bootstrapped.
    pub fn new(path: impl Into<PathBuf>, status_source: S) -> Result<Self, StorageError> {
        let ledger = Self {
            path: path.into(),
            status_source
        };

        ledger.bootstrap()?;

        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new(".")
        }
    }

    fn bootstrap(&self) -> Result<(), StorageError> {
        let directory = self.directory();

        if !directory.is_dir() {
            create_dir_all(directory).map_err(|error| {
                StorageError::at_path(StorageErrorKind::DirectoryCreate, directory).with_source(error)
            })?;
        }

        let header = encode_record(LEDGER_HEADERS).map_err(|error| {
            StorageError::at_path(StorageErrorKind::FileCreate, &self.path).with_source(error)
        })?;

        let created = create_ledger_file(&self.path, |file| file.write_all(&header)).map_err(|error| {
            StorageError::at_path(StorageErrorKind::FileCreate, &self.path).with_source(error)
        })?;

        if created {
            info!("Created ledger at {}", self.path.display());
        }

        Ok(())
    }
}

impl<S: StatusSource> TransactionStorage for CsvLedger<S> {
    /// # Errors
    /// `NotFound`, `NotReadable` or `Open` when the file cannot be opened,
    /// `HeaderRead` when it has no header line and `Read` for anything that
    /// fails while scanning rows.
    fn read_all(&self) -> Result<Vec<LedgerRow>, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::at_path(StorageErrorKind::NotFound, &self.path));
        }

        let file = File::open(&self.path).map_err(|error| {
            let kind = match error.kind() {
                ErrorKind::NotFound => StorageErrorKind::NotFound,
                ErrorKind::PermissionDenied => StorageErrorKind::NotReadable,
                _ => StorageErrorKind::Open
            };

            StorageError::at_path(kind, &self.path).with_source(error)
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()
            .map_err(|error| StorageError::at_path(StorageErrorKind::HeaderRead, &self.path).with_source(error))?
            .clone();

        if headers.is_empty() {
            return Err(StorageError::at_path(StorageErrorKind::HeaderRead, &self.path));
        }

        let mut rows = Vec::new();

        for result in reader.byte_records() {
            let record = result
                .map_err(|error| StorageError::at_path(StorageErrorKind::Read, &self.path).with_source(error))?;

            // Partial, foreign or undecodable lines are tolerated and left out.
            if record.len() != headers.len() {
                continue;
            }

            let Ok(values) = record.iter().map(from_utf8).collect::<Result<Vec<&str>, _>>() else {
                continue;
            };

            rows.push(
                headers.iter()
                    .zip(values)
                    .map(|(column, value)| (column.to_string(), value.to_string()))
                    .collect()
            );
        }

        debug!("Read {} row(s) from {}", rows.len(), self.path.display());

        Ok(rows)
    }

    /// # Errors
    /// `NotWritable` when the directory or file denies writing, `Open` when the
    /// file cannot be opened for appending and `Write` when the row cannot be
    /// encoded or written. A failed write leaves the file at its previous length.
    fn append_row(&self, row: &LedgerRow) -> Result<(), StorageError> {
        let directory = self.directory();
        let writable = metadata(directory)
            .map(|directory_metadata| !directory_metadata.permissions().readonly())
            .unwrap_or(false);

        if !writable {
            return Err(StorageError::at_path(StorageErrorKind::NotWritable, directory));
        }

        let values = LEDGER_HEADERS.iter()
            .map(|column| {
                row.get(*column)
                    .map(String::as_str)
                    .ok_or_else(|| StorageError::new(StorageErrorKind::Write, format!("Row is missing column [{column}]")))
            })
            .collect::<Result<Vec<&str>, StorageError>>()?;

        let line = encode_record(values)
            .map_err(|error| StorageError::at_path(StorageErrorKind::Write, &self.path).with_source(error))?;

        // The file is never recreated here, a vanished ledger must not come back without its header.
        let mut file = OpenOptions::new().append(true).open(&self.path).map_err(|error| {
            let kind = match error.kind() {
                ErrorKind::PermissionDenied => StorageErrorKind::NotWritable,
                _ => StorageErrorKind::Open
            };

            StorageError::at_path(kind, &self.path).with_source(error)
        })?;

        let previous_length = file.metadata()
            .map_err(|error| StorageError::at_path(StorageErrorKind::Open, &self.path).with_source(error))?
            .len();

        write_line(&mut file, &line, previous_length)
            .map_err(|error| StorageError::at_path(StorageErrorKind::Write, &self.path).with_source(error))?;

        debug!("Appended row to {}", self.path.display());

        Ok(())
    }

    fn create_transaction(&self, input: &NewTransaction) -> Result<TransactionRecord, LedgerError> {
        let status = self.status_source.random_status()?;
        let record = TransactionRecord::new(input, status);

        self.append_row(&record.to_row())?;

        Ok(record)
    }
}

/// Creates `path` exclusively and fills it through `initialize`.
///
/// Returns `false` when the file already existed. A file whose initialization
/// fails is removed again, so the next bootstrap starts from scratch instead of
/// finding a headerless ledger.
pub(super) fn create_ledger_file<F>(path: &Path, initialize: F) -> io::Result<bool>
where
    F: FnOnce(&mut File) -> io::Result<()>
{
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(error) => return Err(error)
    };

    if let Err(error) = initialize(&mut file) {
        drop(file);

        if let Err(remove_error) = remove_file(path) {
            warn!("Could not remove incomplete ledger {}: {remove_error}", path.display());
        }

        return Err(error);
    }

    Ok(true)
}

/// Shrinks a write target back to a known length.
pub(super) trait Truncate {
    fn truncate_to(&mut self, length: u64) -> io::Result<()>;
}

impl Truncate for File {
    fn truncate_to(&mut self, length: u64) -> io::Result<()> {
        self.set_len(length)
    }
}

/// Writes one encoded line, cutting the target back to `previous_length` when
/// the write fails so no partial line is left behind.
pub(super) fn write_line<W: Write + Truncate>(target: &mut W, line: &[u8], previous_length: u64) -> io::Result<()> {
    if let Err(error) = target.write_all(line).and_then(|_| target.flush()) {
        if let Err(truncate_error) = target.truncate_to(previous_length) {
            warn!("Could not roll back partial write: {truncate_error}");
        }

        return Err(error);
    }

    Ok(())
}

/// Encodes one CSV line, terminator included, so it can be written in a single call.
fn encode_record<I, T>(record: I) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(record)?;

    writer.into_inner().map_err(|error| csv::Error::from(error.into_error()))
}
