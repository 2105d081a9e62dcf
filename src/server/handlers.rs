use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, header};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::catalog::MovieRecord;
use crate::query::{FilterCriteria, filter_records, find_by_id, sample_random};

use super::AppState;
use super::error::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}

#[instrument(skip(state))]
pub async fn random_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieRecord>>, ApiError> {
    let records = state.load_records().await?;
    let sample = sample_random(&records, state.sample_size());
    debug!(available = records.len(), sampled = sample.len(), "random sample");
    Ok(Json(sample))
}

#[instrument(skip(state, headers, body))]
pub async fn filter_movies(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Vec<MovieRecord>>, ApiError> {
    let criteria = parse_criteria(&headers, &body)?;
    debug!(?criteria, unconstrained = criteria.is_empty(), "filter request");
    let records = state.load_records().await?;
    Ok(Json(filter_records(records, &criteria)))
}

/// Decode a filter body. A request without `Content-Type` is read as JSON;
/// any other declared type must be JSON.
fn parse_criteria(headers: &HeaderMap, body: &[u8]) -> Result<FilterCriteria, ApiError> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        if !is_json_content_type(content_type) {
            return Err(ApiError::unsupported_media_type(
                "Expected request with `Content-Type: application/json`",
            ));
        }
    }
    let Json(criteria) = Json::<FilterCriteria>::from_bytes(body)?;
    Ok(criteria)
}

fn is_json_content_type(value: &HeaderValue) -> bool {
    let Ok(raw) = value.to_str() else {
        return false;
    };
    let essence = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<MovieRecord>, ApiError> {
    let records = state.load_records().await?;
    find_by_id(records, &movie_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("movie {movie_id} not found")))
}
