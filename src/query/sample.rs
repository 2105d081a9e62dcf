//! Random sampling without replacement.

use rand::Rng;
use rand::seq::index;

/// Number of records returned by a random sample unless configured otherwise.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Pick up to `amount` distinct items at random, in random order.
#[must_use]
pub fn sample_random<T: Clone>(items: &[T], amount: usize) -> Vec<T> {
    sample_random_with(items, amount, &mut rand::rng())
}

/// Like [`sample_random`], drawing from the given generator.
pub fn sample_random_with<T, R>(items: &[T], amount: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let amount = amount.min(items.len());
    if amount == 0 {
        return Vec::new();
    }
    index::sample(rng, items.len(), amount)
        .into_iter()
        .map(|position| items[position].clone())
        .collect()
}
