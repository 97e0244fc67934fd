use crate::error::AnalysisError;
use crate::models::api::{
    AnalysisResponse, CompareBody, NormalizeBody, ParamsCompare, ParamsScore, ScoreBody,
};
use crate::models::record::Normalization;
use crate::models::sources::RawSources;
use crate::models::AppState;
use crate::services::{
    compare_sites, normalize, rank_recommendations, resolve_record, score_health,
};
use crate::utils::normalize_domain;
use axum::extract::{Json, State};
use log::info;
use std::sync::Arc;

pub async fn health_handler() -> &'static str {
    "OK"
}

pub async fn score_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<ParamsScore>,
) -> Result<Json<AnalysisResponse<ScoreBody>>, AnalysisError> {
    info!("Scoring {}", params.sources.domain);
    let record = resolve_record(&params.sources, state.fetcher.as_ref()).await?;
    let mode = params.mode.unwrap_or(state.config.default_mode);
    let score = score_health(&record, mode);
    let recommendations = rank_recommendations(&record, &score);
    Ok(Json(AnalysisResponse::new(ScoreBody {
        record,
        score,
        recommendations,
    })))
}

pub async fn compare_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<ParamsCompare>,
) -> Result<Json<AnalysisResponse<CompareBody>>, AnalysisError> {
    info!(
        "Comparing {} against {}",
        params.yours.domain, params.competitor.domain
    );
    let fetcher = state.fetcher.as_ref();
    let (yours, competitor) = tokio::join!(
        resolve_record(&params.yours, fetcher),
        resolve_record(&params.competitor, fetcher)
    );
    let (yours, competitor) = match (yours, competitor) {
        (Ok(yours), Ok(competitor)) => (yours, competitor),
        (Err(AnalysisError::NoData { .. }), Err(AnalysisError::NoData { .. })) => {
            return Err(AnalysisError::NothingToCompare)
        }
        (Err(e), _) | (_, Err(e)) => return Err(e),
    };
    let comparison = compare_sites(&yours, &competitor);
    Ok(Json(AnalysisResponse::new(CompareBody { comparison })))
}

/// Normalization only; nothing is fetched.
pub async fn normalize_handler(
    Json(sources): Json<RawSources>,
) -> Result<Json<AnalysisResponse<NormalizeBody>>, AnalysisError> {
    if normalize_domain(&sources.domain).is_empty() {
        return Err(AnalysisError::MissingDomain);
    }
    match normalize(&sources) {
        Normalization::Ready(record) => Ok(Json(AnalysisResponse::new(NormalizeBody { record }))),
        Normalization::FetchFresh { domain, .. } => Err(AnalysisError::EmptySources { domain }),
    }
}
