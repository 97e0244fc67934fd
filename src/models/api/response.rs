use crate::models::comparison::SiteComparison;
use crate::models::record::NormalizedSiteRecord;
use crate::models::recommendation::Recommendation;
use crate::models::score::ScoreResult;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// Response envelope. Id and timestamp are stamped here, outside the core.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse<T> {
    pub analysis_id: Uuid,
    pub timestamp: String,
    #[serde(flatten)]
    pub body: T,
}

impl<T> AnalysisResponse<T> {
    pub fn new(body: T) -> Self {
        AnalysisResponse {
            analysis_id: Uuid::new_v4(),
            timestamp: Utc::now().to_rfc3339(),
            body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreBody {
    pub record: NormalizedSiteRecord,
    pub score: ScoreResult,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct CompareBody {
    pub comparison: SiteComparison,
}

#[derive(Debug, Serialize)]
pub struct NormalizeBody {
    pub record: NormalizedSiteRecord,
}
