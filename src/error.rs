// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no data available for {domain} after fetching fresh sources")]
    NoData { domain: String },
    #[error("no provider returned data for {domain}")]
    EmptySources { domain: String },
    #[error("neither site has any data to compare")]
    NothingToCompare,
    #[error("domain is required")]
    MissingDomain,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        log::warn!("Analysis failed: {}", self);
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}
