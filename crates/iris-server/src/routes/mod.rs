//! HTTP routes for the inference API.

pub mod health;
pub mod predict;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

/// Build the API router with middleware attached.
pub fn router(state: SharedState) -> Router {
    Router::new()
        // Health check
        .route("/", get(health::health_check))
        // Prediction
        .route("/predict", post(predict::predict_iris))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
