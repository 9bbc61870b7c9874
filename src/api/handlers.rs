use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use crate::data_models::{MovieRecord, SearchResult};
use crate::error::ProxyError;

use super::AppState;
use super::models::{MovieQuery, SearchQuery, non_empty};

pub async fn movie_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MovieQuery>,
) -> Result<Json<MovieRecord>, ProxyError> {
    let title = non_empty(query.title)
        .ok_or(ProxyError::InvalidRequest("Missing title query parameter"))?;
    let year = non_empty(query.year);

    let movie = state.omdb.lookup(&title, year.as_deref()).await?;
    tracing::debug!("relaying movie {:?} ({})", movie.title, movie.year);

    Ok(Json(movie))
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResult>, ProxyError> {
    let keyword =
        non_empty(query.title).ok_or(ProxyError::InvalidRequest("Missing search keyword"))?;

    let result = state.omdb.search(&keyword).await?;
    tracing::debug!(
        "relaying {} matches for {:?}",
        result.matches.len(),
        keyword
    );

    Ok(Json(result))
}

pub async fn health_handler() -> &'static str {
    "ok"
}
