use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::random::{RandomError, Randomizer};

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomizer;

impl Randomizer for ThreadRandomizer {
    fn choice<'a, T>(&self, items: &'a [T]) -> Result<&'a T, RandomError> {
        items.choose(&mut thread_rng()).ok_or(RandomError::EmptyInput)
    }
}
