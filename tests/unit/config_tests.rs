use std::collections::HashMap;
use std::path::PathBuf;

use movie_cards::config::{Config, parse_addr};
use movie_cards::test_utils::{TestCase, run_table_tests};
use tempfile::TempDir;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.data.path, PathBuf::from("../assets/movie-card-data.json"));
    assert_eq!(config.server.addr, "127.0.0.1:8000");
    assert_eq!(config.sampling.size, 10);
}

#[test]
fn test_explicit_file_is_partial() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\naddr = \"0.0.0.0:9000\"\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(config.server.addr, "0.0.0.0:9000");
    assert_eq!(config.data.path, PathBuf::from("../assets/movie-card-data.json"));
}

#[test]
fn test_broken_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert_eq!(err.code(), "config");
}

#[test]
fn test_overrides_table() {
    let cases = vec![
        TestCase {
            name: "no overrides",
            input: vec![],
            expected: Ok((PathBuf::from("../assets/movie-card-data.json"), 10)),
        },
        TestCase {
            name: "data path",
            input: vec![("MOVIE_CARDS_DATA_PATH", "/srv/movies.json")],
            expected: Ok((PathBuf::from("/srv/movies.json"), 10)),
        },
        TestCase {
            name: "sample size with whitespace",
            input: vec![("MOVIE_CARDS_SAMPLE_SIZE", " 3 ")],
            expected: Ok((PathBuf::from("../assets/movie-card-data.json"), 3)),
        },
        TestCase {
            name: "bad sample size",
            input: vec![("MOVIE_CARDS_SAMPLE_SIZE", "many")],
            expected: Err("config".to_string()),
        },
    ];

    run_table_tests(cases, |pairs| {
        let mut config = Config::default();
        config
            .apply_overrides(lookup(&pairs))
            .map(|()| (config.data.path.clone(), config.sampling.size))
            .map_err(|err| err.code().to_string())
    })
    .unwrap();
}

#[test]
fn test_parse_addr_table() {
    let cases = vec![
        TestCase {
            name: "ipv4",
            input: "127.0.0.1:8000",
            expected: true,
        },
        TestCase {
            name: "ipv6",
            input: "[::1]:8000",
            expected: true,
        },
        TestCase {
            name: "padded",
            input: " 0.0.0.0:80 ",
            expected: true,
        },
        TestCase {
            name: "missing port",
            input: "127.0.0.1",
            expected: false,
        },
        TestCase {
            name: "hostname",
            input: "localhost:8000",
            expected: false,
        },
    ];

    run_table_tests(cases, |raw| parse_addr(raw).is_ok()).unwrap();
}
