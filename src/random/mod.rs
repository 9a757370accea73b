mod errors;
mod status_generator;
#[cfg(test)]
mod tests;
mod thread_randomizer;

use crate::types::TransactionStatus;

pub use errors::{GenerationError, RandomError};
pub use status_generator::StatusGenerator;
pub use thread_randomizer::ThreadRandomizer;

/// Picks one element out of a non-empty slice.
pub trait Randomizer: Send + Sync {
    fn choice<'a, T>(&self, items: &'a [T]) -> Result<&'a T, RandomError>;
}

/// Supplies the status assigned to every newly recorded transaction.
pub trait StatusSource: Send + Sync {
    fn random_status(&self) -> Result<TransactionStatus, GenerationError>;
}
