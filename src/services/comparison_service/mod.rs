// src/services/comparison_service/mod.rs

pub mod dimensions;
pub mod rubric;
pub mod summary;

pub use rubric::{security_score, seo_rubric_score};
pub use summary::{build_summary, tally_verdict};

use crate::models::comparison::{ComparisonResult, SiteComparison};
use crate::models::record::NormalizedSiteRecord;
use crate::services::recommendation_service::rank_comparison_gaps;
use crate::utils::audit_log;

type DimensionFn = fn(&NormalizedSiteRecord, &NormalizedSiteRecord) -> Option<ComparisonResult>;

const DIMENSIONS: [DimensionFn; 10] = [
    dimensions::performance,
    dimensions::seo,
    dimensions::backlinks,
    dimensions::content,
    dimensions::traffic,
    dimensions::content_updates,
    dimensions::instagram,
    dimensions::facebook,
    dimensions::technology,
    dimensions::security,
];

/// Side-by-side comparison of two normalized sites.
pub fn compare_sites(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> SiteComparison {
    let dimensions: Vec<ComparisonResult> = DIMENSIONS
        .iter()
        .filter_map(|compare| compare(yours, competitor))
        .collect();
    let summary = build_summary(&dimensions);
    let verdict = tally_verdict(&dimensions);

    audit_log(
        &yours.domain,
        &format!(
            "compared against {}: {} dimensions, {} wins, {} losses",
            competitor.domain,
            dimensions.len(),
            verdict.wins,
            verdict.losses
        ),
    );

    let mut comparison = SiteComparison {
        yours: yours.domain.clone(),
        competitor: competitor.domain.clone(),
        dimensions,
        summary,
        verdict,
        overall_winner: verdict.overall_winner,
    };
    comparison.summary.recommendations = rank_comparison_gaps(&comparison);
    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::comparison::{Dimension, Winner};
    use crate::models::record::{
        Backlinks, CategoryScores, LighthouseSummary, ScorePair, SocialMetrics, Sourced,
        TrafficSummary,
    };
    use serde_json::json;

    fn site(domain: &str) -> NormalizedSiteRecord {
        NormalizedSiteRecord::empty(domain)
    }

    fn with_performance(mut record: NormalizedSiteRecord, performance: f64) -> NormalizedSiteRecord {
        record.lighthouse = Some(Sourced::Available(LighthouseSummary {
            category_scores: CategoryScores {
                performance: Some(ScorePair::from_display(performance)),
                ..Default::default()
            },
            ..Default::default()
        }));
        record
    }

    fn with_backlinks(mut record: NormalizedSiteRecord, total: f64) -> NormalizedSiteRecord {
        record.backlinks = Some(Sourced::Available(Backlinks {
            total_backlinks: Some(total),
            referring_domains: None,
        }));
        record
    }

    fn with_visits(mut record: NormalizedSiteRecord, visits: f64) -> NormalizedSiteRecord {
        record.traffic = Some(Sourced::Available(
            serde_json::from_value::<TrafficSummary>(json!({
                "success": true,
                "source": "similarweb",
                "metrics": {"monthlyVisits": visits}
            }))
            .unwrap(),
        ));
        record
    }

    fn with_instagram(mut record: NormalizedSiteRecord, rate: f64) -> NormalizedSiteRecord {
        record.instagram = Some(Sourced::Available(
            serde_json::from_value::<SocialMetrics>(json!({
                "profile": {"followers": 1200, "avgEngagementRate": rate}
            }))
            .unwrap(),
        ));
        record
    }

    #[test]
    fn faster_site_wins_performance() {
        let yours = with_performance(site("yours.com"), 90.0);
        let competitor = with_performance(site("rival.com"), 70.0);
        let comparison = compare_sites(&yours, &competitor);

        let performance = comparison.dimension(Dimension::Performance).unwrap();
        assert_eq!(performance.winner, Winner::Yours);
        assert_eq!(performance.difference, Some(20.0));
        assert!(comparison
            .summary
            .strengths
            .iter()
            .any(|line| line.contains("significantly faster")));
        assert_eq!(comparison.overall_winner, Winner::Yours);
    }

    #[test]
    fn backlink_gap_is_a_weakness() {
        let yours = with_backlinks(site("yours.com"), 50.0);
        let competitor = with_backlinks(site("rival.com"), 200.0);
        let comparison = compare_sites(&yours, &competitor);

        let backlinks = comparison.dimension(Dimension::Backlinks).unwrap();
        assert_eq!(backlinks.winner, Winner::Competitor);
        assert_eq!(backlinks.difference, Some(-150.0));
        assert!(comparison
            .summary
            .weaknesses
            .iter()
            .any(|line| line.contains("more backlinks")));
        assert_eq!(comparison.verdict.losses, 1);
        assert_eq!(comparison.overall_winner, Winner::Competitor);
        assert!(!comparison.summary.recommendations.is_empty());
    }

    #[test]
    fn traffic_missing_on_both_sides_is_omitted() {
        let yours = with_performance(site("yours.com"), 60.0);
        let competitor = with_performance(site("rival.com"), 60.0);
        let comparison = compare_sites(&yours, &competitor);
        assert!(comparison.dimension(Dimension::Traffic).is_none());
        assert!(comparison.dimension(Dimension::ContentUpdates).is_none());
        assert_eq!(comparison.dimension(Dimension::Performance).unwrap().winner, Winner::Tie);
        assert_eq!(comparison.overall_winner, Winner::Tie);
    }

    #[test]
    fn one_sided_traffic_is_a_tie_with_placeholders() {
        let yours = with_visits(site("yours.com"), 5000.0);
        let comparison = compare_sites(&yours, &site("rival.com"));
        let traffic = comparison.dimension(Dimension::Traffic).unwrap();
        assert_eq!(traffic.winner, Winner::Tie);
        assert_eq!(traffic.difference, None);

        let wire = serde_json::to_value(traffic).unwrap();
        assert_eq!(wire["competitor"]["monthlyVisits"], json!("N/A"));
        assert_eq!(wire["yours"]["monthlyVisits"], json!(5000.0));
    }

    #[test]
    fn traffic_difference_runs_competitor_minus_yours() {
        let yours = with_visits(site("yours.com"), 12_000.0);
        let competitor = with_visits(site("rival.com"), 4_000.0);
        let traffic = compare_sites(&yours, &competitor)
            .dimension(Dimension::Traffic)
            .cloned()
            .unwrap();
        assert_eq!(traffic.winner, Winner::Yours);
        assert_eq!(traffic.difference, Some(-8000.0));
        assert!(traffic.significant);
    }

    #[test]
    fn swapping_sides_flips_every_numeric_winner() {
        let a = with_visits(with_backlinks(with_performance(site("a.com"), 88.0), 300.0), 900.0);
        let b = with_visits(with_backlinks(with_performance(site("b.com"), 64.0), 700.0), 900.0);
        let forward = compare_sites(&a, &b);
        let backward = compare_sites(&b, &a);
        for result in &forward.dimensions {
            let mirror = backward.dimension(result.dimension).unwrap();
            assert_eq!(result.winner, mirror.winner.flipped(), "{:?}", result.dimension);
        }
        let traffic = forward.dimension(Dimension::Traffic).unwrap();
        assert_eq!(traffic.winner, Winner::Tie);
    }

    #[test]
    fn instagram_engagement_counts_toward_wins_only() {
        let yours = with_instagram(site("yours.com"), 4.2);
        let competitor = with_instagram(site("rival.com"), 2.0);
        let forward = compare_sites(&yours, &competitor);
        assert_eq!(forward.verdict.wins, 1);
        assert_eq!(forward.overall_winner, Winner::Yours);

        let backward = compare_sites(&competitor, &yours);
        assert_eq!(
            backward.dimension(Dimension::Instagram).unwrap().winner,
            Winner::Competitor
        );
        assert_eq!(backward.verdict.losses, 0);
        assert_eq!(backward.overall_winner, Winner::Tie);
        assert!(backward
            .summary
            .recommendations
            .iter()
            .any(|r| r.description == "yours.com engages its Instagram audience better."));
    }

    #[test]
    fn equal_gap_at_threshold_adds_no_summary_line() {
        let yours = with_performance(site("yours.com"), 80.0);
        let competitor = with_performance(site("rival.com"), 70.0);
        let comparison = compare_sites(&yours, &competitor);
        let performance = comparison.dimension(Dimension::Performance).unwrap();
        assert_eq!(performance.winner, Winner::Yours);
        assert!(!performance.significant);
        assert!(comparison.summary.strengths.is_empty());
    }
}
