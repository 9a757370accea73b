use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::errors::RecordError;
use crate::models::LedgerRow;
use crate::types::{
    TransactionStatus, COLUMN_ACCOUNT_HOLDER_NAME, COLUMN_ACCOUNT_NUMBER, COLUMN_AMOUNT, COLUMN_STATUS,
    COLUMN_TRANSACTION_DATE, DATE_FORMAT
};

/// Transaction fields that passed validation and are ready to be recorded.
///
/// The status is deliberately absent: it is always assigned by the ledger.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NewTransaction {
    pub transaction_date: NaiveDate,
    pub account_number: String,
    pub account_holder_name: String,
    pub amount: Decimal
}

/// A fully assembled transaction as it is stored in the ledger.
///
/// Serializes with the ledger column names as keys so that the rendered
/// record matches what is on disk.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "Transaction Date")]
    pub transaction_date: NaiveDate,
    #[serde(rename = "Account Number")]
    pub account_number: String,
    #[serde(rename = "Account Holder Name")]
    pub account_holder_name: String,
    /// Kept with the scale it was given, `100.50` stays `100.50`.
    #[serde(rename = "Amount")]
    pub amount: Decimal,
    #[serde(rename = "Status")]
    pub status: TransactionStatus
}

impl TransactionRecord {
    pub fn new(input: &NewTransaction, status: TransactionStatus) -> Self {
        Self {
            transaction_date: input.transaction_date,
            account_number: input.account_number.clone(),
            account_holder_name: input.account_holder_name.clone(),
            amount: input.amount,
            status
        }
    }

    /// Renders the record as the raw column values written to the ledger.
    pub fn to_row(&self) -> LedgerRow {
        LedgerRow::from([
            (COLUMN_TRANSACTION_DATE.to_string(), self.transaction_date.format(DATE_FORMAT).to_string()),
            (COLUMN_ACCOUNT_NUMBER.to_string(), self.account_number.clone()),
            (COLUMN_ACCOUNT_HOLDER_NAME.to_string(), self.account_holder_name.clone()),
            (COLUMN_AMOUNT.to_string(), self.amount.to_string()),
            (COLUMN_STATUS.to_string(), self.status.to_string())
        ])
    }
}

impl TryFrom<&LedgerRow> for TransactionRecord {
    type Error = RecordError;

    fn try_from(row: &LedgerRow) -> Result<Self, Self::Error> {
        let date = column(row, COLUMN_TRANSACTION_DATE)?;
        let amount = column(row, COLUMN_AMOUNT)?;
        let status = column(row, COLUMN_STATUS)?;

        Ok(Self {
            transaction_date: NaiveDate::parse_from_str(date, DATE_FORMAT)
                .map_err(|_| RecordError::InvalidDate { value: date.to_string() })?,
            account_number: column(row, COLUMN_ACCOUNT_NUMBER)?.to_string(),
            account_holder_name: column(row, COLUMN_ACCOUNT_HOLDER_NAME)?.to_string(),
            amount: Decimal::from_str(amount.trim())
                .map_err(|_| RecordError::InvalidAmount { value: amount.to_string() })?,
            status: TransactionStatus::from_str(status)
                .map_err(|_| RecordError::InvalidStatus { value: status.to_string() })?
        })
    }
}

fn column<'a>(row: &'a LedgerRow, name: &'static str) -> Result<&'a str, RecordError> {
    row.get(name)
        .map(String::as_str)
        .ok_or(RecordError::MissingColumn { column: name })
}
