// src/services/recommendation_service/mod.rs

pub mod gaps;
pub mod health;

use crate::models::comparison::SiteComparison;
use crate::models::record::NormalizedSiteRecord;
use crate::models::recommendation::Recommendation;
use crate::models::score::ScoreResult;
use std::cmp::Reverse;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Highest priority first; equal priorities keep candidate order.
fn finalize(mut candidates: Vec<Recommendation>) -> Vec<Recommendation> {
    candidates.sort_by_key(|r| Reverse(r.priority.weight()));
    candidates.truncate(MAX_RECOMMENDATIONS);
    candidates
}

pub fn rank_recommendations(record: &NormalizedSiteRecord, scores: &ScoreResult) -> Vec<Recommendation> {
    finalize(health::health_candidates(record, scores))
}

pub fn rank_comparison_gaps(comparison: &SiteComparison) -> Vec<Recommendation> {
    finalize(gaps::gap_candidates(comparison))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::{Priority, RecommendationCategory};
    use crate::models::record::{CategoryScores, LighthouseSummary, ScorePair, Sourced};
    use crate::models::score::ScoreMode;
    use crate::services::scoring_service::score_health;
    use serde_json::json;

    #[test]
    fn empty_record_asks_for_data() {
        let record = NormalizedSiteRecord::empty("example.com");
        let scores = score_health(&record, ScoreMode::Enhanced);
        let ranked = rank_recommendations(&record, &scores);
        assert_eq!(ranked[0].title, "Connect more data sources");
        assert!(ranked
            .iter()
            .any(|r| r.category == RecommendationCategory::DataSources && r.priority == Priority::Low));
    }

    #[test]
    fn slow_site_gets_core_web_vitals_first_and_list_is_bounded() {
        let mut record = NormalizedSiteRecord::empty("example.com");
        record.lighthouse = Some(Sourced::Available(LighthouseSummary {
            category_scores: CategoryScores {
                performance: Some(ScorePair::from_display(42.0)),
                seo: Some(ScorePair::from_display(61.0)),
                ..Default::default()
            },
            opportunities: vec!["Reduce unused JavaScript".into(), "Properly size images".into()],
            ..Default::default()
        }));
        record.technical_seo = Some(Sourced::Available(
            serde_json::from_value(json!({
                "robotsTxt": {"exists": false, "score": 0},
                "sitemap": {"exists": false, "score": 0},
                "ssl": {"hasSSL": true, "score": 100}
            }))
            .unwrap(),
        ));
        let scores = score_health(&record, ScoreMode::Enhanced);
        let ranked = rank_recommendations(&record, &scores);

        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
        assert_eq!(ranked[0].title, "Improve Core Web Vitals");
        let weights: Vec<u8> = ranked.iter().map(|r| r.priority.weight()).collect();
        assert!(weights.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(ranked
            .iter()
            .any(|r| r.description.contains("robots.txt") && r.description.contains("XML sitemap")));
    }
}
