use thiserror::Error;

#[derive(Debug, Error)]
pub enum RandomError {
    #[error("Cannot choose from empty array")]
    EmptyInput
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No transaction statuses available")]
    NoStatusesAvailable,
    #[error("Failed to select random transaction status")]
    SelectionFailed {
        #[source]
        source: RandomError
    }
}
