//! Movie catalog loading.
//!
//! The catalog is a JSON document of the form
//! `{"movie_card_data": [ {...}, {...} ]}`. It is read fresh on every
//! call; nothing is cached between requests.

pub mod record;

use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{MovieError, Result};

pub use record::{ImdbScore, MovieRecord};

/// Default data file location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "../assets/movie-card-data.json";

/// Top-level key holding the record array.
pub const DATA_KEY: &str = "movie_card_data";

#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
}

impl Catalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record, degrading to an empty catalog on failure.
    ///
    /// A missing or malformed data file is logged and yields no records;
    /// callers never see the error.
    #[must_use]
    pub fn load(&self) -> Vec<MovieRecord> {
        match self.try_load() {
            Ok(records) => {
                debug!(path = %self.path.display(), count = records.len(), "loaded movie catalog");
                records
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    code = err.code(),
                    error = %err,
                    "movie data unavailable, serving empty catalog"
                );
                Vec::new()
            }
        }
    }

    /// Load every record, reporting why the data file could not be used.
    pub fn try_load(&self) -> Result<Vec<MovieRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(MovieError::DataNotFound(self.path.clone()));
            }
            Err(err) => return Err(err.into()),
        };
        parse_document(&raw).map_err(|reason| MovieError::MalformedData {
            path: self.path.clone(),
            reason,
        })
    }
}

/// Parse a catalog document into records.
///
/// Array entries that are not JSON objects are skipped.
pub fn parse_document(raw: &str) -> std::result::Result<Vec<MovieRecord>, String> {
    let document: Value = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    let Value::Object(mut top) = document else {
        return Err("top-level value is not an object".to_string());
    };
    let entries = match top.remove(DATA_KEY) {
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(format!("`{DATA_KEY}` is not an array")),
        None => return Err(format!("missing `{DATA_KEY}` key")),
    };

    let mut records = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        match MovieRecord::try_from(entry) {
            Ok(record) => records.push(record),
            Err(skipped) => {
                warn!(position, value = %skipped, "skipping non-object movie entry");
            }
        }
    }
    Ok(records)
}
