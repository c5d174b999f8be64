use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod recommendations;
pub mod titles;

use crate::middleware::request_id;
use crate::state::AppState;

/// Creates the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(
                    request_id::request_id_middleware,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(request_id::make_span_with_request_id),
                )
                // The browser front end is served from a different origin
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/titles", get(titles::list))
        .route("/titles/search", get(titles::search))
        .route("/recommendations", post(recommendations::recommend))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
