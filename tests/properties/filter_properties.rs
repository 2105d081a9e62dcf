use proptest::prelude::*;
use serde_json::json;

use movie_cards::catalog::MovieRecord;
use movie_cards::query::{FilterCriteria, filter_records};

fn arb_record() -> impl Strategy<Value = MovieRecord> {
    (
        "[a-z]{1,8}",
        "[A-Za-z ]{0,12}",
        prop::option::of(0.0f64..10.0),
        prop::collection::vec("[a-c]", 0..3),
    )
        .prop_map(|(id, director, score, actors)| {
            MovieRecord::try_from(json!({
                "movie_id": id,
                "director_name": director,
                "imdb_score": score,
                "actors": actors,
            }))
            .unwrap()
        })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of("[A-Za-z]{0,3}"),
        prop::option::of(0.0f64..10.0),
        prop::option::of(prop::collection::vec("[a-c]", 0..2)),
    )
        .prop_map(|(director, min_rating, actors)| FilterCriteria {
            director,
            min_rating,
            actors,
            ..FilterCriteria::default()
        })
}

proptest! {
    #[test]
    fn test_empty_criteria_is_identity(records in prop::collection::vec(arb_record(), 0..20)) {
        let matched = filter_records(records.clone(), &FilterCriteria::default());
        prop_assert_eq!(matched, records);
    }

    #[test]
    fn test_filter_is_ordered_subsequence(
        records in prop::collection::vec(arb_record(), 0..20),
        criteria in arb_criteria(),
    ) {
        let matched = filter_records(records.clone(), &criteria);
        prop_assert!(matched.len() <= records.len());

        let mut remaining = records.iter();
        for record in &matched {
            prop_assert!(remaining.any(|candidate| candidate == record));
        }
    }

    #[test]
    fn test_filter_agrees_with_per_record_check(
        records in prop::collection::vec(arb_record(), 0..20),
        criteria in arb_criteria(),
    ) {
        let expected: Vec<MovieRecord> = records
            .iter()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect();
        prop_assert_eq!(filter_records(records, &criteria), expected);
    }

    #[test]
    fn test_filter_is_idempotent(
        records in prop::collection::vec(arb_record(), 0..20),
        criteria in arb_criteria(),
    ) {
        let once = filter_records(records, &criteria);
        let twice = filter_records(once.clone(), &criteria);
        prop_assert_eq!(twice, once);
    }
}
