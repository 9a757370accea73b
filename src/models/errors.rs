use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Ledger row is missing column [{column}]")]
    MissingColumn {
        column: &'static str
    },
    #[error("Ledger row has an invalid transaction date [{value}]")]
    InvalidDate {
        value: String
    },
    #[error("Ledger row has an invalid amount [{value}]")]
    InvalidAmount {
        value: String
    },
    #[error("Ledger row has an invalid status [{value}]")]
    InvalidStatus {
        value: String
    }
}
