mod errors;
mod transaction_validator;

use std::collections::HashMap;

pub use errors::ValidationError;
pub use transaction_validator::TransactionValidator;

/// Raw request fields keyed by their wire name.
pub type FieldMap = HashMap<String, serde_json::Value>;

pub const FIELD_TRANSACTION_DATE: &str = "transactionDate";
pub const FIELD_ACCOUNT_NUMBER: &str = "accountNumber";
pub const FIELD_ACCOUNT_HOLDER_NAME: &str = "accountHolderName";
pub const FIELD_AMOUNT: &str = "amount";
