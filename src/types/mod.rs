mod errors;
mod status;
#[cfg(test)]
mod tests;

pub use errors::StatusParseError;
pub use status::TransactionStatus;

/// Column names of the ledger file, in the order they are written.
pub const LEDGER_HEADERS: [&str; 5] = [
    COLUMN_TRANSACTION_DATE,
    COLUMN_ACCOUNT_NUMBER,
    COLUMN_ACCOUNT_HOLDER_NAME,
    COLUMN_AMOUNT,
    COLUMN_STATUS
];

pub const COLUMN_TRANSACTION_DATE: &str = "Transaction Date";
pub const COLUMN_ACCOUNT_NUMBER: &str = "Account Number";
pub const COLUMN_ACCOUNT_HOLDER_NAME: &str = "Account Holder Name";
pub const COLUMN_AMOUNT: &str = "Amount";
pub const COLUMN_STATUS: &str = "Status";

pub const DATE_FORMAT: &str = "%Y-%m-%d";
