use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

pub const TRANSACTION_DATE_REQUIRED: &str = "Transaction date is required";
pub const TRANSACTION_DATE_INVALID_FORMAT: &str = "Transaction date must be a valid date (YYYY-MM-DD format)";
pub const ACCOUNT_NUMBER_REQUIRED: &str = "Account number is required";
pub const ACCOUNT_NUMBER_INVALID_FORMAT: &str = "Account number must be in format XXXX-XXXX-XXXX";
pub const ACCOUNT_HOLDER_NAME_REQUIRED: &str = "Account holder name is required";
pub const ACCOUNT_HOLDER_NAME_INVALID: &str =
    "Account holder name must be between 2-100 characters and contain only letters and spaces";
pub const AMOUNT_REQUIRED: &str = "Amount is required";
pub const AMOUNT_INVALID: &str = "Amount must be a positive number";
pub const AMOUNT_OUT_OF_RANGE: &str =
    "Amount must be at least 0.0000000000000000000000000001 and at most 79228162514264337593543950335";

/// Every field that failed validation, keyed by field name.
#[derive(Debug, Clone, Eq, PartialEq, Error, Serialize)]
#[error("Validation failed")]
pub struct ValidationError {
    pub violations: BTreeMap<&'static str, &'static str>
}

impl ValidationError {
    pub fn new(violations: BTreeMap<&'static str, &'static str>) -> Self {
        Self { violations }
    }
}
