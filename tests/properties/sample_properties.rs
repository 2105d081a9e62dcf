use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use movie_cards::query::{DEFAULT_SAMPLE_SIZE, sample_random, sample_random_with};

proptest! {
    #[test]
    fn test_sample_length_is_capped(len in 0usize..50) {
        let items: Vec<usize> = (0..len).collect();
        let sample = sample_random(&items, DEFAULT_SAMPLE_SIZE);
        prop_assert_eq!(sample.len(), len.min(DEFAULT_SAMPLE_SIZE));
    }

    #[test]
    fn test_sample_draws_distinct_members(len in 0usize..50, amount in 0usize..20, seed: u64) {
        let items: Vec<usize> = (0..len).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let sample = sample_random_with(&items, amount, &mut rng);

        let unique: HashSet<usize> = sample.iter().copied().collect();
        prop_assert_eq!(unique.len(), sample.len());
        prop_assert!(sample.iter().all(|item| *item < len));
    }

    #[test]
    fn test_sample_is_reproducible_for_a_seed(len in 0usize..50, seed: u64) {
        let items: Vec<usize> = (0..len).collect();
        let first = sample_random_with(&items, DEFAULT_SAMPLE_SIZE, &mut StdRng::seed_from_u64(seed));
        let second = sample_random_with(&items, DEFAULT_SAMPLE_SIZE, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }
}
