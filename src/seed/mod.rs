
use tracing::info;

use crate::models::LedgerRow;
use crate::storage::{StorageError, TransactionStorage};
use crate::types::{
    TransactionStatus, COLUMN_ACCOUNT_HOLDER_NAME, COLUMN_ACCOUNT_NUMBER, COLUMN_AMOUNT, COLUMN_STATUS,
    COLUMN_TRANSACTION_DATE
};

const DEMO_TRANSACTIONS: [(&str, &str, &str, &str, TransactionStatus); 12] = [
    ("2025-03-01", "7289-3445-1121", "Maria Johnson", "150.00", TransactionStatus::Settled),
    ("2025-03-02", "1122-3456-7890", "John Smith", "75.50", TransactionStatus::Pending),
    ("2025-03-03", "3344-5566-7788", "Robert Chen", "220.25", TransactionStatus::Settled),
    ("2025-03-04", "8899-0011-2233", "Sarah Williams", "310.75", TransactionStatus::Failed),
    ("2025-03-04", "9988-7766-5544", "David Garcia", "45.99", TransactionStatus::Pending),
    ("2025-03-05", "2233-4455-6677", "Emily Taylor", "500.00", TransactionStatus::Settled),
    ("2025-03-06", "1357-2468-9012", "Michael Brown", "99.95", TransactionStatus::Settled),
    ("2025-03-07", "5551-2345-6789", "Jennifer Lee", "175.25", TransactionStatus::Pending),
    ("2025-03-08", "7890-1234-5678", "Thomas Wilson", "62.50", TransactionStatus::Failed),
    ("2025-03-08", "1212-3434-5656", "Jessica Martin", "830.00", TransactionStatus::Settled),
    ("2025-03-09", "9876-5432-1011", "Christopher Davis", "124.75", TransactionStatus::Pending),
    ("2025-03-10", "4646-8282-1919", "Amanda Robinson", "300.50", TransactionStatus::Settled)
];

/// Appends a fixed set of demo transactions and returns how many were written.
pub fn seed_ledger<S: TransactionStorage + ?Sized>(storage: &S) -> Result<usize, StorageError> {
    for (date, account_number, name, amount, status) in DEMO_TRANSACTIONS {
        let row = LedgerRow::from([
            (COLUMN_TRANSACTION_DATE.to_string(), date.to_string()),
            (COLUMN_ACCOUNT_NUMBER.to_string(), account_number.to_string()),
            (COLUMN_ACCOUNT_HOLDER_NAME.to_string(), name.to_string()),
            (COLUMN_AMOUNT.to_string(), amount.to_string()),
            (COLUMN_STATUS.to_string(), status.to_string())
        ]);

        storage.append_row(&row)?;
    }

    info!("Seeded ledger with {} demo transactions", DEMO_TRANSACTIONS.len());

    Ok(DEMO_TRANSACTIONS.len())
}
