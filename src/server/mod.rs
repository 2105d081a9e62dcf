//! HTTP surface.
//!
//! Routes:
//! - `GET /` health probe
//! - `GET /movies/random` random sample of the catalog
//! - `POST /movies/filter` records matching a [`FilterCriteria`] body
//! - `GET /movies/{movie_id}` one record by id
//!
//! Every request reloads the data file; a missing or broken file yields
//! empty results rather than an error status.
//!
//! [`FilterCriteria`]: crate::query::FilterCriteria

mod error;
mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::catalog::{Catalog, MovieRecord};
use crate::error::Result;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    sample_size: usize,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, sample_size: usize) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sample_size,
        }
    }

    #[must_use]
    pub const fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Fresh read of the data file, off the async workers.
    async fn load_records(&self) -> std::result::Result<Vec<MovieRecord>, ApiError> {
        let catalog = Arc::clone(&self.catalog);
        tokio::task::spawn_blocking(move || catalog.load())
            .await
            .map_err(|err| ApiError::internal(err.into()))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/movies/random", get(handlers::random_movies))
        .route("/movies/filter", post(handlers::filter_movies))
        .route("/movies/{movie_id}", get(handlers::get_movie))
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin, method and header, with credentials.
///
/// Wildcards cannot be combined with credentials, so the request's own
/// origin, method and headers are mirrored back.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(%local_addr, data = %state.catalog.path().display(), "movie-cards listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
