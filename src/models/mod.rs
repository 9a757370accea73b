mod errors;
mod transaction;

use std::collections::HashMap;

pub use errors::RecordError;
pub use transaction::{NewTransaction, TransactionRecord};

/// One ledger line keyed by the column names of the ledger header.
pub type LedgerRow = HashMap<String, String>;
