use std::error::Error;
use std::io::{read_to_string, stderr, stdin, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_ledger::config::Config;
use transaction_ledger::random::{StatusGenerator, ThreadRandomizer};
use transaction_ledger::seed::seed_ledger;
use transaction_ledger::service::TransactionService;
use transaction_ledger::storage::{CsvLedger, LedgerError};
use transaction_ledger::validation::{FieldMap, TransactionValidator};

const EXIT_FAILURE: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;

fn main() -> Result<()> {
    //NOTE: If the command set grows beyond these three, the clap crate should take over argument parsing.
    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        print_usage();
        exit(EXIT_FAILURE);
    };

    let config = Config::from_env();

    setup_logging(config.log_level);

    let ledger = match CsvLedger::new(&config.ledger_path, StatusGenerator::new(ThreadRandomizer)) {
        Ok(ledger) => Arc::new(ledger),
        Err(storage_error) => fail(LedgerError::from(storage_error))
    };

    info!("Using ledger at {}", ledger.path().display());

    match command.as_str() {
        "list" => {
            let service = TransactionService::new(ledger);
            let records = service.list_all().unwrap_or_else(|error| fail(error));

            write_json(&records)?;
        }
        "create" => {
            let payload = match args.get(2) {
                Some(payload) if payload != "-" => payload.clone(),
                _ => read_to_string(stdin().lock())?
            };

            let Ok(fields) = serde_json::from_str::<FieldMap>(&payload) else {
                write_json(&json!({ "error": "Invalid JSON payload" }))?;
                exit(EXIT_INVALID_INPUT);
            };

            let input = match TransactionValidator::new().validate(&fields) {
                Ok(input) => input,
                Err(validation_error) => {
                    write_json(&json!({
                        "error": validation_error.to_string(),
                        "violations": validation_error.violations
                    }))?;
                    exit(EXIT_INVALID_INPUT);
                }
            };

            let service = TransactionService::new(ledger);
            let record = service.create(&input).unwrap_or_else(|error| fail(error));

            write_json(&record)?;
        }
        "seed" => {
            let written = seed_ledger(ledger.as_ref()).unwrap_or_else(|error| fail(LedgerError::from(error)));

            write_json(&json!({ "seeded": written }))?;
        }
        _ => {
            print_usage();
            exit(EXIT_FAILURE);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: transaction-ledger <command>");
    eprintln!("Commands:");
    eprintln!("  list                 print every recorded transaction");
    eprintln!("  create [json|-]      validate and record one transaction (reads stdin without an argument)");
    eprintln!("  seed                 append demo transactions");
    eprintln!("Environment: CSV_STORAGE_PATH (default: var/transactions.csv), LOG_LEVEL (default: error)");
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout only carries JSON output, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

/// Logs the full failure and reports only its generic label to the caller.
fn fail(ledger_error: LedgerError) -> ! {
    error!("{ledger_error}");

    let mut cause = ledger_error.source();
    while let Some(source) = cause {
        error!("  caused by: {source}");
        cause = source.source();
    }

    if let Err(write_error) = write_json(&json!({ "error": ledger_error.public_message() })) {
        error!("Could not write error response: {write_error}");
    }

    exit(EXIT_FAILURE);
}

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer(&mut output, value)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
