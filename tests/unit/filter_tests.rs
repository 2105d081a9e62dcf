use movie_cards::catalog::MovieRecord;
use movie_cards::query::{FilterCriteria, filter_records};
use movie_cards::test_utils::fixtures::{CatalogFixture, sample_records};
use movie_cards::test_utils::{TestCase, run_table_tests};
use serde_json::{Value, json};

fn records() -> Vec<MovieRecord> {
    sample_records()
        .into_iter()
        .filter_map(|value| MovieRecord::try_from(value).ok())
        .collect()
}

fn ids(body: Value) -> Vec<String> {
    let criteria: FilterCriteria = serde_json::from_value(body).unwrap();
    filter_records(records(), &criteria)
        .iter()
        .filter_map(|record| record.movie_id().map(str::to_string))
        .collect()
}

fn owned(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

#[test]
fn test_filter_bodies_table() {
    let cases = vec![
        TestCase {
            name: "empty body keeps everything",
            input: json!({}),
            expected: owned(&["tt0001", "tt0002", "tt0003", "tt0004"]),
        },
        TestCase {
            name: "explicit nulls keep everything",
            input: json!({"director": null, "minRating": null, "actors": null}),
            expected: owned(&["tt0001", "tt0002", "tt0003", "tt0004"]),
        },
        TestCase {
            name: "empty strings and lists are inert",
            input: json!({"director": "", "movieName": "", "songNames": [], "actors": []}),
            expected: owned(&["tt0001", "tt0002", "tt0003", "tt0004"]),
        },
        TestCase {
            name: "director substring ignores case",
            input: json!({"director": "JANE"}),
            expected: owned(&["tt0001", "tt0003", "tt0004"]),
        },
        TestCase {
            name: "movie name substring",
            input: json!({"movieName": "alpha"}),
            expected: owned(&["tt0001", "tt0004"]),
        },
        TestCase {
            name: "rating keeps null scores and drops unparsable ones",
            input: json!({"minRating": 7.5}),
            expected: owned(&["tt0001", "tt0002", "tt0003"]),
        },
        TestCase {
            name: "rating given as text",
            input: json!({"minRating": "8"}),
            expected: owned(&["tt0002", "tt0003"]),
        },
        TestCase {
            name: "zero rating is inert",
            input: json!({"minRating": 0}),
            expected: owned(&["tt0001", "tt0002", "tt0003", "tt0004"]),
        },
        TestCase {
            name: "every song must be present",
            input: json!({"songNames": ["song a", "SONG B"]}),
            expected: owned(&["tt0002"]),
        },
        TestCase {
            name: "songs match whole titles only",
            input: json!({"songNames": ["Song"]}),
            expected: owned(&[]),
        },
        TestCase {
            name: "actors combined with director",
            input: json!({"director": "jane", "actors": ["y"]}),
            expected: owned(&["tt0003"]),
        },
        TestCase {
            name: "unknown fields are ignored",
            input: json!({"genre": "Drama", "movieName": "beta"}),
            expected: owned(&["tt0002"]),
        },
    ];

    run_table_tests(cases, ids).unwrap();
}

#[test]
fn test_filter_returns_records_verbatim() {
    let fixture = CatalogFixture::with_records(&sample_records());
    let criteria: FilterCriteria = serde_json::from_value(json!({"movieName": "beta"})).unwrap();
    let matched = filter_records(fixture.catalog().load(), &criteria);

    assert_eq!(matched.len(), 1);
    let value = serde_json::to_value(&matched[0]).unwrap();
    assert_eq!(value, sample_records()[1]);

    let keys: Vec<&String> = matched[0].fields().keys().collect();
    assert_eq!(
        keys,
        ["movie_id", "movie_name", "director_name", "imdb_score", "songs", "actors", "genres"]
    );
}

#[test]
fn test_filter_on_malformed_catalog_is_empty() {
    for raw in ["not json", "[]", r#"{"other": []}"#, r#"{"movie_card_data": {}}"#] {
        let fixture = CatalogFixture::with_raw(raw);
        let criteria = FilterCriteria::default();
        assert!(
            filter_records(fixture.catalog().load(), &criteria).is_empty(),
            "expected empty catalog for {raw}"
        );
    }
}
