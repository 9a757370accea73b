use super::TransactionService;
use crate::models::{LedgerRow, NewTransaction, TransactionRecord};
use crate::random::{GenerationError, StatusSource};
use crate::storage::{CsvLedger, LedgerError, StorageError, TransactionStorage};
use crate::types::TransactionStatus;

use std::fs;
use std::io::Write;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

struct FixedStatus(TransactionStatus);

impl StatusSource for FixedStatus {
    fn random_status(&self) -> Result<TransactionStatus, GenerationError> {
        Ok(self.0)
    }
}

fn create_service(directory: &TempDir) -> Result<TransactionService<CsvLedger<FixedStatus>>> {
    let ledger = CsvLedger::new(directory.path().join("transactions.csv"), FixedStatus(TransactionStatus::Settled))?;

    Ok(TransactionService::new(Arc::new(ledger)))
}

fn create_input(date: (i32, u32, u32), amount: &str) -> Result<NewTransaction> {
    Ok(NewTransaction {
        transaction_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).ok_or_else(|| anyhow!("bad date"))?,
        account_number: "7289-3445-1121".to_string(),
        account_holder_name: "Maria Johnson".to_string(),
        amount: Decimal::from_str(amount)?
    })
}

#[test]
fn test_list_all_on_an_empty_ledger_is_empty() -> Result<()> {
    let directory = TempDir::new()?;
    let service = create_service(&directory)?;

    assert!(service.list_all()?.is_empty());

    Ok(())
}

#[test]
fn test_created_records_are_listed_in_creation_order() -> Result<()> {
    let directory = TempDir::new()?;
    let service = create_service(&directory)?;

    let first = service.create(&create_input((2025, 3, 1), "150.00")?)?;
    let second = service.create(&create_input((2025, 3, 2), "75.50")?)?;

    assert_eq!(first.status, TransactionStatus::Settled);
    assert_eq!(service.list_all()?, vec![first, second]);

    Ok(())
}

#[test]
fn test_rows_with_unreadable_values_are_left_out_of_listing() -> Result<()> {
    let directory = TempDir::new()?;
    let service = create_service(&directory)?;

    let record = service.create(&create_input((2025, 3, 1), "150.00")?)?;

    let mut file = fs::OpenOptions::new().append(true).open(directory.path().join("transactions.csv"))?;
    writeln!(file, "not-a-date,7289-3445-1121,Maria Johnson,150.00,Settled")?;
    writeln!(file, "2025-03-01,7289-3445-1121,Maria Johnson,150.00,Refunded")?;

    assert_eq!(service.list_all()?, vec![record]);

    Ok(())
}

#[test]
fn test_storage_failures_propagate_from_listing() -> Result<()> {
    let directory = TempDir::new()?;
    let service = create_service(&directory)?;

    fs::remove_file(directory.path().join("transactions.csv"))?;

    assert!(matches!(service.list_all(), Err(LedgerError::Storage(_))));

    Ok(())
}

/// Storage double that records what the service forwards to it.
struct RecordingStorage {
    rows: Mutex<Vec<LedgerRow>>
}

impl TransactionStorage for RecordingStorage {
    fn read_all(&self) -> Result<Vec<LedgerRow>, StorageError> {
        Ok(self.rows.lock().unwrap_or_else(|error| error.into_inner()).clone())
    }

    fn append_row(&self, row: &LedgerRow) -> Result<(), StorageError> {
        self.rows.lock().unwrap_or_else(|error| error.into_inner()).push(row.clone());
        Ok(())
    }

    fn create_transaction(&self, input: &NewTransaction) -> Result<TransactionRecord, LedgerError> {
        let record = TransactionRecord::new(input, TransactionStatus::Pending);
        self.append_row(&record.to_row())?;
        Ok(record)
    }
}

#[test]
fn test_service_delegates_to_any_storage() -> Result<()> {
    let storage = Arc::new(RecordingStorage { rows: Mutex::new(Vec::new()) });
    let service = TransactionService::new(storage.clone());

    let record = service.create(&create_input((2025, 3, 5), "500.00")?)?;

    assert_eq!(service.list_all()?, vec![record]);

    Ok(())
}
