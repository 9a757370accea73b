
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

pub const STORAGE_PATH_VARIABLE: &str = "CSV_STORAGE_PATH";
pub const LOG_LEVEL_VARIABLE: &str = "LOG_LEVEL";
pub const DEFAULT_STORAGE_PATH: &str = "var/transactions.csv";

/// Runtime settings of the command line adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ledger_path: PathBuf,
    pub log_level: LevelFilter
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ledger_path = lookup(STORAGE_PATH_VARIABLE)
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string());

        let log_level = lookup(LOG_LEVEL_VARIABLE)
            .map(|level| parse_log_level(&level))
            .unwrap_or(LevelFilter::ERROR);

        Self {
            ledger_path: PathBuf::from(ledger_path),
            log_level
        }
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
