mod csv_ledger;
mod errors;

use crate::models::{LedgerRow, NewTransaction, TransactionRecord};

pub use csv_ledger::CsvLedger;
pub use errors::{LedgerError, StorageError, StorageErrorKind};

/// Append-only transaction store.
///
/// Implementations perform blocking I/O and do not serialize concurrent callers.
pub trait TransactionStorage: Send + Sync {
    /// Every well-formed row, in the order it was appended.
    fn read_all(&self) -> Result<Vec<LedgerRow>, StorageError>;
    /// Appends exactly one row, or nothing at all.
    fn append_row(&self, row: &LedgerRow) -> Result<(), StorageError>;
    /// Assigns a status to validated input, appends it and returns what was stored.
    fn create_transaction(&self, input: &NewTransaction) -> Result<TransactionRecord, LedgerError>;
}
