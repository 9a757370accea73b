//! Transaction ledger kept in a flat CSV file.
//!
//! Raw request fields go through [`validation::TransactionValidator`], validated
//! transactions are recorded through [`service::TransactionService`] and stored by
//! [`storage::CsvLedger`], which assigns each one a status from
//! [`random::StatusGenerator`].

pub mod config;
pub mod models;
pub mod random;
pub mod seed;
pub mod service;
pub mod storage;
pub mod types;
pub mod validation;
