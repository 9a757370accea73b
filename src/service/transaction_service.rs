use std::sync::Arc;

use tracing::warn;

use crate::models::{NewTransaction, TransactionRecord};
use crate::storage::{LedgerError, TransactionStorage};

/// Entry point for callers that list or record transactions.
pub struct TransactionService<S: TransactionStorage> {
    storage: Arc<S>
}

impl<S: TransactionStorage> TransactionService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Every recorded transaction in the order it was created.
    ///
    /// Rows that are structurally complete but whose values cannot be read as a
    /// record are logged and left out.
    pub fn list_all(&self) -> Result<Vec<TransactionRecord>, LedgerError> {
        let rows = self.storage.read_all()?;

        let records = rows.iter()
            .filter_map(|row| match TransactionRecord::try_from(row) {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!("Skipping unreadable ledger row: {error}");
                    None
                }
            })
            .collect();

        Ok(records)
    }

    /// Records an already validated transaction.
    pub fn create(&self, input: &NewTransaction) -> Result<TransactionRecord, LedgerError> {
        self.storage.create_transaction(input)
    }
}
