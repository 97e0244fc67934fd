// src/api/mod.rs

pub mod handler;

pub use handler::{compare_handler, health_handler, normalize_handler, score_handler};

use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/analyze/score", post(score_handler))
        .route("/analyze/compare", post(compare_handler))
        .route("/analyze/normalize", post(normalize_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
