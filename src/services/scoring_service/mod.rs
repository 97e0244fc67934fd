// src/services/scoring_service/mod.rs

pub mod categories;
pub mod quality;
pub mod vitals;

pub use quality::data_quality;
pub use vitals::{core_vitals_score, VitalRating};

use crate::models::record::NormalizedSiteRecord;
use crate::models::score::{CategoryScore, ScoreCategory, ScoreMode, ScoreResult};
use crate::utils::audit_log;
use crate::utils::score_utils::display_score;
use log::debug;
use std::collections::BTreeMap;

fn category_value(record: &NormalizedSiteRecord, category: ScoreCategory) -> Option<u32> {
    let raw = match category {
        ScoreCategory::Technical => categories::technical(record),
        ScoreCategory::UserExperience => categories::user_experience(record),
        ScoreCategory::SeoHealth => categories::seo_health(record),
        ScoreCategory::SearchVisibility => categories::search_visibility(record),
        ScoreCategory::TechnicalSeo => categories::technical_seo(record),
    };
    raw.map(display_score)
}

/// Weighted health score over the categories of `mode`.
///
/// Missing categories contribute nothing and the remaining weights are not
/// rescaled, so a site with half its data scores at most about half. The
/// overall value is `None` only when no category could be computed.
pub fn score_health(record: &NormalizedSiteRecord, mode: ScoreMode) -> ScoreResult {
    let categories: Vec<CategoryScore> = mode
        .weights()
        .iter()
        .map(|&(category, weight)| CategoryScore {
            category,
            value: category_value(record, category),
            weight,
        })
        .collect();

    let present: Vec<f64> = categories
        .iter()
        .filter_map(|c| c.value.map(|value| value as f64 * c.weight))
        .collect();
    let overall = if present.is_empty() {
        None
    } else {
        Some(display_score(present.iter().sum()))
    };

    let breakdown: BTreeMap<ScoreCategory, Option<u32>> =
        categories.iter().map(|c| (c.category, c.value)).collect();
    for (category, value) in &breakdown {
        debug!("{} {} score: {:?}", record.domain, category, value);
    }

    let data_quality = data_quality(record, mode);
    match overall {
        Some(score) => audit_log(
            &record.domain,
            &format!("overall score {} ({:?} mode)", score, mode),
        ),
        None => audit_log(&record.domain, "no category could be scored"),
    }

    ScoreResult {
        overall,
        breakdown,
        categories,
        mode,
        data_quality,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{
        CategoryScores, LighthouseSummary, ScorePair, SearchConsoleSummary, Sourced, TechnicalSeo,
    };
    use crate::models::score::QualityLevel;
    use serde_json::json;

    fn with_performance(performance: f64) -> NormalizedSiteRecord {
        let mut record = NormalizedSiteRecord::empty("example.com");
        record.lighthouse = Some(Sourced::Available(LighthouseSummary {
            category_scores: CategoryScores {
                performance: Some(ScorePair::from_display(performance)),
                ..Default::default()
            },
            ..Default::default()
        }));
        record
    }

    #[test]
    fn technical_only_site_scores_its_weighted_share() {
        let result = score_health(&with_performance(80.0), ScoreMode::Enhanced);
        assert_eq!(result.category(ScoreCategory::Technical), Some(80));
        assert_eq!(result.category(ScoreCategory::SeoHealth), None);
        assert_eq!(result.overall, Some(20));

        let basic = score_health(&with_performance(80.0), ScoreMode::Basic);
        assert_eq!(basic.overall, Some(32));
        assert_eq!(basic.categories.len(), 3);
    }

    #[test]
    fn no_categories_means_no_overall() {
        let result = score_health(&NormalizedSiteRecord::empty("example.com"), ScoreMode::Enhanced);
        assert_eq!(result.overall, None);
        assert!(result.breakdown.values().all(Option::is_none));
        assert_eq!(result.data_quality.available_sources, 0);
        assert_eq!(result.data_quality.level, QualityLevel::Limited);
    }

    #[test]
    fn pagespeed_performance_stands_in_for_missing_lighthouse() {
        let mut record = NormalizedSiteRecord::empty("example.com");
        record.pagespeed = Some(Sourced::Available(
            serde_json::from_value(json!({
                "mobile": {"labData": {"performanceScore": 31, "lcp": 2100}}
            }))
            .unwrap(),
        ));
        // 0.6 * 31 + 0.4 * 100
        let result = score_health(&record, ScoreMode::Enhanced);
        assert_eq!(result.category(ScoreCategory::Technical), Some(59));
        assert_eq!(result.overall, Some(15));
    }

    #[test]
    fn vitals_blend_into_technical() {
        let mut record = with_performance(90.0);
        record.pagespeed = Some(Sourced::Available(
            serde_json::from_value(json!({
                "mobile": {
                    "fieldData": {"lcp": 3000, "inp": 150, "cls": 0.05},
                    "labData": {"lcp": 1000}
                }
            }))
            .unwrap(),
        ));
        // field data: (50 + 100 + 100) / 3, blended 0.6 * 90 + 0.4 * 83.33
        let result = score_health(&record, ScoreMode::Enhanced);
        assert_eq!(result.category(ScoreCategory::Technical), Some(87));
    }

    #[test]
    fn technical_seo_counts_missing_checks_as_zero() {
        let mut record = NormalizedSiteRecord::empty("example.com");
        record.technical_seo = Some(Sourced::Available(
            serde_json::from_value::<TechnicalSeo>(json!({
                "ssl": {"hasSSL": true, "score": 100},
                "metaTags": {"score": 80}
            }))
            .unwrap(),
        ));
        record.search_console = Some(Sourced::Available(SearchConsoleSummary {
            ctr: Some(2.0),
            position: Some(20.0),
            ..Default::default()
        }));
        let result = score_health(&record, ScoreMode::Enhanced);
        assert_eq!(result.category(ScoreCategory::TechnicalSeo), Some(45));
        assert_eq!(result.category(ScoreCategory::SearchVisibility), Some(63));
        // 45 * 0.15 + 63 * 0.20 = 19.35
        assert_eq!(result.overall, Some(19));
        assert_eq!(result.data_quality.available_sources, 2);
    }

    #[test]
    fn failed_source_is_treated_as_absent() {
        let mut record = with_performance(80.0);
        record.traffic = Some(Sourced::Failed(crate::models::record::SourceFailure::new("boom")));
        let result = score_health(&record, ScoreMode::Enhanced);
        assert_eq!(result.category(ScoreCategory::UserExperience), None);
        assert_eq!(result, score_health(&record, ScoreMode::Enhanced));
    }
}
