use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{catalog::CatalogEntry, error::AppResult, services::fuzzy, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    fuzzy::DEFAULT_LIMIT
}

/// Full catalog in index order, for populating the selection control
pub async fn list(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    Json(state.catalog.entries())
}

/// Handler for fuzzy title search backing the search box
///
/// An empty or whitespace query falls back to the unfiltered catalog
/// list; a query with no close match returns an empty list and the UI
/// decides how to present it.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<String>>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Ok(Json(state.catalog.titles().to_vec()));
    }

    let matches = fuzzy::close_matches(query, state.catalog.titles(), params.limit);
    Ok(Json(matches))
}
