use super::{TransactionStatus, LEDGER_HEADERS};
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_status_round_trips_through_its_ledger_text() -> Result<()> {
    for status in TransactionStatus::ALL {
        assert_eq!(TransactionStatus::from_str(&status.to_string())?, status);
    }

    Ok(())
}

#[test]
fn test_status_parsing_is_case_sensitive_and_closed() {
    assert!(TransactionStatus::from_str("pending").is_err());
    assert!(TransactionStatus::from_str("Refunded").is_err());
    assert!(TransactionStatus::from_str("").is_err());
}

#[test]
fn test_ledger_header_line_is_fixed() {
    assert_eq!(
        LEDGER_HEADERS.join(","),
        "Transaction Date,Account Number,Account Holder Name,Amount,Status"
    );
}
