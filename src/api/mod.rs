use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::omdb::OmdbClient;

pub mod handlers;
pub mod models;

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub omdb: OmdbClient,
}

impl AppState {
    pub fn new(omdb: OmdbClient) -> Self {
        Self { omdb }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(OmdbClient::from_config(config)?))
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/movie", get(handlers::movie_handler))
        .route("/search", get(handlers::search_handler))
        .route("/health", get(handlers::health_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
