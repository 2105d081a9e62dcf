//! Filter criteria and the per-record match predicate.

use std::cmp::Ordering;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{ImdbScore, MovieRecord};

/// Optional, conjunctive filter criteria.
///
/// Field names follow the HTTP body (`movieName`, `minRating`,
/// `songNames`); the snake_case spellings are accepted as aliases. An
/// absent or `null` field imposes no constraint, and so do an empty
/// string, an empty list and a `minRating` of zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(default, alias = "movie_name", skip_serializing_if = "Option::is_none")]
    pub movie_name: Option<String>,

    #[serde(
        default,
        alias = "min_rating",
        deserialize_with = "lenient_rating",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_rating: Option<f64>,

    #[serde(default, alias = "song_names", skip_serializing_if = "Option::is_none")]
    pub song_names: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<Vec<String>>,
}

impl FilterCriteria {
    /// True when no criterion constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compile().is_empty()
    }

    /// Normalize the criteria once so a scan does not re-lowercase them per record.
    #[must_use]
    pub fn compile(&self) -> CompiledCriteria {
        CompiledCriteria {
            director: lowered_text(self.director.as_deref()),
            movie_name: lowered_text(self.movie_name.as_deref()),
            min_rating: self.min_rating.filter(|rating| *rating != 0.0),
            song_names: lowered_list(self.song_names.as_deref()),
            actors: lowered_list(self.actors.as_deref()),
        }
    }

    #[must_use]
    pub fn matches(&self, record: &MovieRecord) -> bool {
        self.compile().matches(record)
    }
}

/// Lowercased form of [`FilterCriteria`] with inert criteria removed.
#[derive(Debug, Clone, Default)]
pub struct CompiledCriteria {
    director: Option<String>,
    movie_name: Option<String>,
    min_rating: Option<f64>,
    song_names: Vec<String>,
    actors: Vec<String>,
}

impl CompiledCriteria {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.director.is_none()
            && self.movie_name.is_none()
            && self.min_rating.is_none()
            && self.song_names.is_empty()
            && self.actors.is_empty()
    }

    /// Checks run in a fixed order and stop at the first failure.
    #[must_use]
    pub fn matches(&self, record: &MovieRecord) -> bool {
        if let Some(director) = &self.director {
            if !contains_folded(record.director_name(), director) {
                return false;
            }
        }
        if let Some(movie_name) = &self.movie_name {
            if !contains_folded(record.movie_name(), movie_name) {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if !meets_rating(record.imdb_score(), min_rating) {
                return false;
            }
        }
        if !self.song_names.is_empty() && !contains_all(record.songs(), &self.song_names) {
            return false;
        }
        if !self.actors.is_empty() && !contains_all(record.actors(), &self.actors) {
            return false;
        }
        true
    }
}

fn contains_folded(haystack: Option<&str>, needle: &str) -> bool {
    haystack.unwrap_or_default().to_lowercase().contains(needle)
}

// A record without a score is not rated, so it passes; a score that does
// not parse fails.
fn meets_rating(score: Option<&ImdbScore>, min_rating: f64) -> bool {
    match score {
        None => true,
        Some(score) => score
            .value()
            .is_some_and(|value| value.partial_cmp(&min_rating) != Some(Ordering::Less)),
    }
}

fn contains_all(items: &[String], wanted: &[String]) -> bool {
    let items: Vec<String> = items.iter().map(|item| item.to_lowercase()).collect();
    wanted.iter().all(|want| items.contains(want))
}

fn lowered_text(value: Option<&str>) -> Option<String> {
    value
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

fn lowered_list(values: Option<&[String]>) -> Vec<String> {
    values
        .unwrap_or_default()
        .iter()
        .map(|value| value.to_lowercase())
        .collect()
}

/// Accept `minRating` as a JSON number or numeric text.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Number(f64),
        Text(String),
    }

    match Option::<Rating>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Rating::Number(number)) => Ok(Some(number)),
        Some(Rating::Text(text)) => text.trim().parse::<f64>().map(Some).map_err(|_| {
            D::Error::custom(format!("invalid minRating `{text}`: expected a number"))
        }),
    }
}
