use crate::models::comparison::{Dimension, SiteComparison, Winner};
use crate::models::recommendation::{Priority, Recommendation, RecommendationCategory as Category};

/// One recommendation per material dimension the competitor wins.
pub fn gap_candidates(comparison: &SiteComparison) -> Vec<Recommendation> {
    comparison
        .dimensions
        .iter()
        .filter(|result| result.winner == Winner::Competitor && result.significant)
        .map(|result| {
            let gap = result
                .difference
                .map(|d| format!("{:.0}", d.abs()))
                .unwrap_or_default();
            match result.dimension {
                Dimension::Performance => Recommendation::new(
                    Category::Performance,
                    Priority::High,
                    "Close the performance gap",
                    format!("{} scores {} points higher on Lighthouse performance.", comparison.competitor, gap),
                    "Faster pages than your competitor",
                ),
                Dimension::Seo => Recommendation::new(
                    Category::Seo,
                    Priority::High,
                    "Match competitor on-page SEO",
                    format!("{} is {} points ahead on the on-page SEO checklist.", comparison.competitor, gap),
                    "Stronger relevance signals",
                ),
                Dimension::Security => Recommendation::new(
                    Category::Security,
                    Priority::High,
                    "Harden site security",
                    "Serve over HTTPS, remove mixed content and put the site behind a CDN.",
                    "Trust and ranking parity",
                ),
                Dimension::Backlinks => Recommendation::new(
                    Category::Backlinks,
                    Priority::Medium,
                    "Grow your backlink profile",
                    format!("{} has {} more backlinks. Pursue guest posts, digital PR and partner links.", comparison.competitor, gap),
                    "Higher domain authority",
                ),
                Dimension::Traffic => Recommendation::new(
                    Category::Traffic,
                    Priority::Medium,
                    "Grow organic traffic",
                    format!("{} gets {} more monthly visits.", comparison.competitor, gap),
                    "More visitors",
                ),
                Dimension::ContentUpdates => Recommendation::new(
                    Category::Content,
                    Priority::Medium,
                    "Publish more often",
                    format!("{} publishes about {} more posts per month.", comparison.competitor, gap),
                    "Fresher content for search engines",
                ),
                Dimension::Technology => Recommendation::new(
                    Category::DataSources,
                    Priority::Medium,
                    "Install analytics",
                    "Your competitor measures visitors and you do not.",
                    "Data to guide improvements",
                ),
                Dimension::Content => Recommendation::new(
                    Category::Content,
                    Priority::Low,
                    "Write deeper pages",
                    format!("{} pages carry {} more words.", comparison.competitor, gap),
                    "Better topical coverage",
                ),
                Dimension::Instagram | Dimension::Facebook => Recommendation::new(
                    Category::Social,
                    Priority::Low,
                    "Lift social engagement",
                    format!(
                        "{} engages its {} audience better.",
                        comparison.competitor,
                        result.dimension.label()
                    ),
                    "Stronger brand reach",
                ),
            }
        })
        .collect()
}
