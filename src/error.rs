//! Error types for movie-cards.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("data file not found: {}", .0.display())]
    DataNotFound(PathBuf),

    #[error("malformed data file {}: {reason}", .path.display())]
    MalformedData { path: PathBuf, reason: String },

    #[error("movie not found: {0}")]
    NotFound(String),
}

impl MovieError {
    /// Stable machine-readable code used in `--json` error output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Config(_) => "config",
            Self::DataNotFound(_) => "data_not_found",
            Self::MalformedData { .. } => "malformed_data",
            Self::NotFound(_) => "not_found",
        }
    }
}

pub type Result<T> = std::result::Result<T, MovieError>;
