use tracing::trace;

use crate::random::{GenerationError, Randomizer, StatusSource, ThreadRandomizer};
use crate::types::TransactionStatus;

/// Draws a status out of the closed [`TransactionStatus`] set.
#[derive(Debug, Clone, Default)]
pub struct StatusGenerator<R: Randomizer = ThreadRandomizer> {
    randomizer: R
}

impl<R: Randomizer> StatusGenerator<R> {
    pub fn new(randomizer: R) -> Self {
        Self { randomizer }
    }

    fn pick(&self, statuses: &[TransactionStatus]) -> Result<TransactionStatus, GenerationError> {
        if statuses.is_empty() {
            return Err(GenerationError::NoStatusesAvailable);
        }

        let status = self.randomizer.choice(statuses)
            .map_err(|source| GenerationError::SelectionFailed { source })?;

        trace!("Generated transaction status [{status}]");

        Ok(*status)
    }
}

impl<R: Randomizer> StatusSource for StatusGenerator<R> {
    fn random_status(&self) -> Result<TransactionStatus, GenerationError> {
        self.pick(&TransactionStatus::ALL)
    }
}

#[cfg(test)]
impl<R: Randomizer> StatusGenerator<R> {
    pub(crate) fn pick_from(&self, statuses: &[TransactionStatus]) -> Result<TransactionStatus, GenerationError> {
        self.pick(statuses)
    }
}
