use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::catalog::{Catalog, DATA_KEY};

/// A data file in an isolated temp directory.
pub struct CatalogFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl CatalogFixture {
    /// A catalog path that does not exist on disk.
    #[must_use]
    pub fn missing() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().join("movie-card-data.json");
        Self {
            temp_dir,
            data_path,
        }
    }

    /// A well-formed document holding `records`.
    #[must_use]
    pub fn with_records(records: &[Value]) -> Self {
        let document = json!({ DATA_KEY: records });
        Self::with_raw(&document.to_string())
    }

    /// A data file with arbitrary, possibly broken, contents.
    #[must_use]
    pub fn with_raw(content: &str) -> Self {
        let fixture = Self::missing();
        std::fs::write(&fixture.data_path, content).expect("Failed to write data file");
        fixture
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.data_path.clone())
    }
}

/// A small catalog covering the shapes real datasets contain.
#[must_use]
pub fn sample_records() -> Vec<Value> {
    vec![
        json!({
            "movie_id": "tt0001",
            "movie_name": "Alpha",
            "director_name": "Jane Doe",
            "imdb_score": "7.5",
            "songs": ["Song A"],
            "actors": ["X"],
            "genres": "Drama|Romance",
        }),
        json!({
            "movie_id": "tt0002",
            "movie_name": "Beta Nights",
            "director_name": "John Roe",
            "imdb_score": 8.9,
            "songs": ["Song A", "Song B"],
            "actors": ["X", "Y"],
            "genres": "Action",
        }),
        json!({
            "movie_id": "tt0003",
            "movie_name": "Gamma",
            "director_name": "jane smith",
            "imdb_score": null,
            "songs": [],
            "actors": ["Y"],
        }),
        json!({
            "movie_id": "tt0004",
            "movie_name": "Alpha Returns",
            "director_name": "Jane Doe",
            "imdb_score": "TBD",
        }),
    ]
}
