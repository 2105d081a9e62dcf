//! Movie record model.
//!
//! A record keeps the JSON object it was read from, verbatim and in its
//! original key order, alongside typed read-only views of the handful of
//! fields the query engine inspects. Serializing a record emits the
//! original object, so fields the engine never reads pass through intact.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The raw `imdb_score` value of a record.
///
/// Datasets carry scores both as JSON numbers and as text such as `"7.5"`,
/// and some text values are not numbers at all. Booleans count as 1 and 0;
/// arrays and objects are kept as their JSON text and never parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ImdbScore {
    Number(f64),
    Text(String),
}

impl ImdbScore {
    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(number) => Some(
                number
                    .as_f64()
                    .map_or_else(|| Self::Text(number.to_string()), Self::Number),
            ),
            Value::Bool(flag) => Some(Self::Number(if *flag { 1.0 } else { 0.0 })),
            Value::String(text) => Some(Self::Text(text.clone())),
            other => Some(Self::Text(other.to_string())),
        }
    }

    /// Numeric value of the score, or `None` when the text does not parse.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }
}

/// One movie card from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct MovieRecord {
    movie_id: Option<String>,
    movie_name: Option<String>,
    director_name: Option<String>,
    imdb_score: Option<ImdbScore>,
    songs: Vec<String>,
    actors: Vec<String>,
    fields: Map<String, Value>,
}

impl MovieRecord {
    #[must_use]
    pub fn movie_id(&self) -> Option<&str> {
        self.movie_id.as_deref()
    }

    #[must_use]
    pub fn movie_name(&self) -> Option<&str> {
        self.movie_name.as_deref()
    }

    #[must_use]
    pub fn director_name(&self) -> Option<&str> {
        self.director_name.as_deref()
    }

    #[must_use]
    pub const fn imdb_score(&self) -> Option<&ImdbScore> {
        self.imdb_score.as_ref()
    }

    #[must_use]
    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    #[must_use]
    pub fn actors(&self) -> &[String] {
        &self.actors
    }

    /// The original JSON object, including fields the engine never reads.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for MovieRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            movie_id: fields.get("movie_id").and_then(id_view),
            movie_name: fields.get("movie_name").and_then(text_view),
            director_name: fields.get("director_name").and_then(text_view),
            imdb_score: fields.get("imdb_score").and_then(ImdbScore::from_json),
            songs: list_view(fields.get("songs")),
            actors: list_view(fields.get("actors")),
            fields,
        }
    }
}

impl From<MovieRecord> for Map<String, Value> {
    fn from(record: MovieRecord) -> Self {
        record.fields
    }
}

impl TryFrom<Value> for MovieRecord {
    type Error = Value;

    /// Accepts JSON objects; any other value is handed back unchanged.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self::from(fields)),
            other => Err(other),
        }
    }
}

fn text_view(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn id_view(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn list_view(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
