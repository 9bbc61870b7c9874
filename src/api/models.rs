use serde::Deserialize;

/// Query string for `GET /movie`.
#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    pub title: Option<String>,
    pub year: Option<String>,
}

/// Query string for `GET /search`. The keyword arrives under `title`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
}

/// Trims a query value and drops it when nothing is left.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
