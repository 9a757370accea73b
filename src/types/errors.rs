use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unknown transaction status: {0}")]
pub struct StatusParseError(pub String);
