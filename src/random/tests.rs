use super::{GenerationError, RandomError, Randomizer, StatusGenerator, StatusSource, ThreadRandomizer};
use crate::types::TransactionStatus;

use std::collections::HashSet;
use std::error::Error;

use anyhow::Result;

/// Always fails, as if it had been handed an empty set.
struct BrokenRandomizer;

impl Randomizer for BrokenRandomizer {
    fn choice<'a, T>(&self, _items: &'a [T]) -> Result<&'a T, RandomError> {
        Err(RandomError::EmptyInput)
    }
}

#[test]
fn test_choice_returns_a_member_of_the_input() -> Result<()> {
    let randomizer = ThreadRandomizer;
    let items = [3, 5, 7, 11];

    for _ in 0..100 {
        assert!(items.contains(randomizer.choice(&items)?));
    }

    Ok(())
}

#[test]
fn test_choice_on_single_element_returns_it() -> Result<()> {
    assert_eq!(*ThreadRandomizer.choice(&["only"])?, "only");

    Ok(())
}

#[test]
fn test_choice_on_empty_input_fails() {
    let items: [u8; 0] = [];

    assert!(matches!(ThreadRandomizer.choice(&items), Err(RandomError::EmptyInput)));
}

#[test]
fn test_choice_eventually_produces_variety() -> Result<()> {
    let items = ["a", "b", "c"];
    let mut seen = HashSet::new();

    for _ in 0..500 {
        seen.insert(*ThreadRandomizer.choice(&items)?);
    }

    assert!(seen.len() > 1);

    Ok(())
}

#[test]
fn test_generator_only_produces_known_statuses() -> Result<()> {
    let generator: StatusGenerator = StatusGenerator::default();

    for _ in 0..100 {
        assert!(TransactionStatus::ALL.contains(&generator.random_status()?));
    }

    Ok(())
}

#[test]
fn test_generator_wraps_randomizer_failures_with_cause() {
    let generator = StatusGenerator::new(BrokenRandomizer);
    let result = generator.random_status();

    let Err(error) = result else {
        panic!("expected a generation error");
    };

    assert!(matches!(error, GenerationError::SelectionFailed { .. }));
    assert!(error.source().is_some_and(|cause| cause.to_string() == "Cannot choose from empty array"));
}

#[test]
fn test_generation_error_message_leaves_the_cause_to_the_source_chain() {
    let error = GenerationError::SelectionFailed { source: RandomError::EmptyInput };

    assert_eq!(error.to_string(), "Failed to select random transaction status");
}

#[test]
fn test_generator_rejects_an_empty_status_set() {
    let generator: StatusGenerator = StatusGenerator::default();

    assert!(matches!(generator.pick_from(&[]), Err(GenerationError::NoStatusesAvailable)));
}
