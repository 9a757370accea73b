use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::models::NewTransaction;
use crate::types::DATE_FORMAT;
use crate::validation::errors::*;
use crate::validation::{
    FieldMap, FIELD_ACCOUNT_HOLDER_NAME, FIELD_ACCOUNT_NUMBER, FIELD_AMOUNT, FIELD_TRANSACTION_DATE
};

const NAME_MIN_LENGTH: usize = 2;
const NAME_MAX_LENGTH: usize = 100;

type Violations = BTreeMap<&'static str, &'static str>;

/// Checks raw request fields and turns them into a [`NewTransaction`].
///
/// Every field is checked independently and all failures are reported together,
/// so a caller always sees the complete violation map for a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionValidator;

impl TransactionValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, fields: &FieldMap) -> Result<NewTransaction, ValidationError> {
        let mut violations = Violations::new();

        let transaction_date = collect(&mut violations, FIELD_TRANSACTION_DATE, validate_date(fields.get(FIELD_TRANSACTION_DATE)));
        let account_number = collect(&mut violations, FIELD_ACCOUNT_NUMBER, validate_account_number(fields.get(FIELD_ACCOUNT_NUMBER)));
        let account_holder_name = collect(&mut violations, FIELD_ACCOUNT_HOLDER_NAME, validate_name(fields.get(FIELD_ACCOUNT_HOLDER_NAME)));
        let amount = collect(&mut violations, FIELD_AMOUNT, validate_amount(fields.get(FIELD_AMOUNT)));

        let (Some(transaction_date), Some(account_number), Some(account_holder_name), Some(amount)) =
            (transaction_date, account_number, account_holder_name, amount)
        else {
            debug!("Transaction rejected with {} violation(s)", violations.len());
            return Err(ValidationError::new(violations));
        };

        Ok(NewTransaction {
            transaction_date,
            account_number,
            account_holder_name,
            amount
        })
    }
}

fn collect<T>(violations: &mut Violations, field: &'static str, result: Result<T, &'static str>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            violations.insert(field, message);
            None
        }
    }
}

fn validate_date(value: Option<&Value>) -> Result<NaiveDate, &'static str> {
    if is_blank(value) {
        return Err(TRANSACTION_DATE_REQUIRED);
    }

    let Some(Value::String(text)) = value else {
        return Err(TRANSACTION_DATE_INVALID_FORMAT);
    };

    // Parsing alone accepts forms like `2025-9-5`; the re-format has to match exactly.
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == *text)
        .ok_or(TRANSACTION_DATE_INVALID_FORMAT)
}

fn validate_account_number(value: Option<&Value>) -> Result<String, &'static str> {
    if is_blank(value) {
        return Err(ACCOUNT_NUMBER_REQUIRED);
    }

    match value {
        Some(Value::String(text)) if is_account_number(text) => Ok(text.clone()),
        _ => Err(ACCOUNT_NUMBER_INVALID_FORMAT)
    }
}

fn validate_name(value: Option<&Value>) -> Result<String, &'static str> {
    if is_blank(value) {
        return Err(ACCOUNT_HOLDER_NAME_REQUIRED);
    }

    let Some(Value::String(text)) = value else {
        return Err(ACCOUNT_HOLDER_NAME_INVALID);
    };

    let trimmed = text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'));
    let valid = (NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&trimmed.len())
        && trimmed.chars().all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace() || c == '\x0B');

    if valid {
        Ok(text.clone())
    } else {
        Err(ACCOUNT_HOLDER_NAME_INVALID)
    }
}

/// The amount has to be numeric and strictly positive; only then does it matter
/// whether it also fits the decimal range the ledger stores amounts in.
fn validate_amount(value: Option<&Value>) -> Result<Decimal, &'static str> {
    let text = match value {
        None | Some(Value::Null) => return Err(AMOUNT_REQUIRED),
        Some(Value::String(text)) if text.is_empty() => return Err(AMOUNT_REQUIRED),
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(_) => return Err(AMOUNT_INVALID)
    };

    match parse_numeric(&text) {
        Some(amount) if amount > 0.0 => {}
        _ => return Err(AMOUNT_INVALID)
    }

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .filter(|amount| *amount > Decimal::ZERO)
        .ok_or(AMOUNT_OUT_OF_RANGE)
}

fn is_account_number(text: &str) -> bool {
    let bytes = text.as_bytes();

    bytes.len() == 14
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 9 => *byte == b'-',
            _ => byte.is_ascii_digit()
        })
}

/// Plain decimal or exponent notation only; `f64` parsing alone would also take `inf` and `NaN`.
fn parse_numeric(text: &str) -> Option<f64> {
    let plain = !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));

    if !plain {
        return None;
    }

    text.parse::<f64>().ok()
}

/// Treats the same values as missing that a loosely typed form post would:
/// absent, `null`, `false`, `""`, `"0"`, zero and empty collections.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::String(text)) => text.is_empty() || text == "0",
        Some(Value::Number(number)) => number.as_f64() == Some(0.0),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(entries)) => entries.is_empty()
    }
}
