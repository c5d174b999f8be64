use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::RecommendationSet,
    services::recommendations,
    state::AppState,
};

/// Default minimum IMDb rating, matching the UI slider default
const DEFAULT_MIN_RATING: f64 = 7.0;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub title: String,
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
}

fn default_min_rating() -> f64 {
    DEFAULT_MIN_RATING
}

/// Handler for the recommendations endpoint
///
/// The title is expected to originate from catalog-derived UI controls;
/// an unknown title indicates UI/state desynchronization and is surfaced
/// as 404 rather than swallowed.
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationSet>> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Title must not be empty".to_string(),
        ));
    }

    if !(0.0..=10.0).contains(&request.min_rating) {
        return Err(AppError::InvalidInput(format!(
            "Minimum rating must be between 0.0 and 10.0, got {}",
            request.min_rating
        )));
    }

    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        min_rating = request.min_rating,
        "Processing recommendation request"
    );

    let response = recommendations::build_recommendations(
        &state.catalog,
        &state.similarity,
        state.metadata.clone(),
        &request.title,
        request.min_rating,
    )
    .await?;

    tracing::info!(
        request_id = %request_id,
        returned = response.recommendations.len(),
        "Recommendation request completed"
    );

    Ok(Json(response))
}
