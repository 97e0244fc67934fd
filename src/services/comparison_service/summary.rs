use crate::models::comparison::{
    ComparisonResult, ComparisonSummary, Dimension, OverallVerdict, SideMetrics, Winner,
};

fn amount(value: f64) -> String {
    format!("{:.0}", value.abs())
}

/// Strength, weakness and opportunity lines for material gaps.
pub fn build_summary(dimensions: &[ComparisonResult]) -> ComparisonSummary {
    let mut summary = ComparisonSummary::default();
    for result in dimensions {
        add_missing_data_hint(result, &mut summary);
        if !result.significant {
            continue;
        }
        let gap = result.difference.map(amount).unwrap_or_default();
        match (result.dimension, result.winner) {
            (_, Winner::Tie) => {}
            (Dimension::Performance, Winner::Yours) => summary
                .strengths
                .push(format!("Your site is significantly faster ({} points higher performance score)", gap)),
            (Dimension::Performance, Winner::Competitor) => {
                summary
                    .weaknesses
                    .push(format!("Competitor's site is significantly faster ({} points higher performance score)", gap));
                summary
                    .opportunities
                    .push("Optimize page speed to close the performance gap".to_string());
            }
            (Dimension::Seo, Winner::Yours) => summary
                .strengths
                .push(format!("Stronger on-page SEO ({} points ahead)", gap)),
            (Dimension::Seo, Winner::Competitor) => {
                summary
                    .weaknesses
                    .push(format!("Competitor has better on-page SEO ({} points ahead)", gap));
                summary
                    .opportunities
                    .push("Fix meta tags, headings and structured data gaps".to_string());
            }
            (Dimension::Backlinks, Winner::Yours) => summary
                .strengths
                .push(format!("You have significantly more backlinks ({} more)", gap)),
            (Dimension::Backlinks, Winner::Competitor) => {
                summary
                    .weaknesses
                    .push(format!("Competitor has significantly more backlinks ({} more)", gap));
                summary
                    .opportunities
                    .push("Build backlinks through outreach and linkable content".to_string());
            }
            (Dimension::Content, Winner::Yours) => summary
                .strengths
                .push(format!("Your pages carry more content ({} more words)", gap)),
            (Dimension::Content, Winner::Competitor) => {
                summary
                    .weaknesses
                    .push(format!("Competitor's pages carry more content ({} more words)", gap));
                summary
                    .opportunities
                    .push("Expand thin pages with in-depth content".to_string());
            }
            (Dimension::Traffic, Winner::Yours) => summary
                .strengths
                .push(format!("Your site receives significantly more traffic ({} more monthly visits)", gap)),
            (Dimension::Traffic, Winner::Competitor) => summary
                .weaknesses
                .push(format!("Competitor receives significantly more traffic ({} more monthly visits)", gap)),
            (Dimension::ContentUpdates, Winner::Yours) => summary
                .strengths
                .push("You publish new content more frequently".to_string()),
            (Dimension::ContentUpdates, Winner::Competitor) => {
                summary
                    .weaknesses
                    .push("Competitor publishes new content more frequently".to_string());
                summary
                    .opportunities
                    .push("Increase your publishing cadence".to_string());
            }
            (Dimension::Instagram | Dimension::Facebook, winner) => {
                let network = result.dimension.label();
                if winner == Winner::Yours {
                    summary.strengths.push(format!("Higher {} engagement", network));
                } else {
                    summary
                        .weaknesses
                        .push(format!("Competitor has higher {} engagement", network));
                    summary
                        .opportunities
                        .push(format!("Post more engaging {} content", network));
                }
            }
            (Dimension::Technology, Winner::Yours) => summary
                .strengths
                .push("You track visitors with analytics and the competitor does not".to_string()),
            (Dimension::Technology, Winner::Competitor) => {
                summary
                    .weaknesses
                    .push("Competitor tracks visitors with analytics and you do not".to_string());
                summary
                    .opportunities
                    .push("Install an analytics platform".to_string());
            }
            (Dimension::Security, Winner::Yours) => summary
                .strengths
                .push("Stronger security posture (HTTPS, CDN, no mixed content)".to_string()),
            (Dimension::Security, Winner::Competitor) => {
                summary
                    .weaknesses
                    .push("Competitor has a stronger security posture".to_string());
                summary
                    .opportunities
                    .push("Serve everything over HTTPS behind a CDN".to_string());
            }
        }
    }
    summary
}

fn add_missing_data_hint(result: &ComparisonResult, summary: &mut ComparisonSummary) {
    match &result.yours {
        SideMetrics::Traffic(side) if side.monthly_visits.value().is_none() => summary
            .opportunities
            .push("Connect analytics to compare traffic".to_string()),
        SideMetrics::ContentUpdates(side) if side.average_posts_per_month.value().is_none() => summary
            .opportunities
            .push("Publish an RSS feed or sitemap so content freshness can be tracked".to_string()),
        _ => {}
    }
}

const VERDICT_DIMENSIONS: [Dimension; 5] = [
    Dimension::Performance,
    Dimension::Seo,
    Dimension::Backlinks,
    Dimension::Traffic,
    Dimension::ContentUpdates,
];

/// Wins also count Instagram engagement; losses do not.
pub fn tally_verdict(dimensions: &[ComparisonResult]) -> OverallVerdict {
    let winner_of = |dimension: Dimension| {
        dimensions
            .iter()
            .find(|r| r.dimension == dimension)
            .map(|r| r.winner)
    };
    let count = |side: Winner| {
        VERDICT_DIMENSIONS
            .iter()
            .filter(|d| winner_of(**d) == Some(side))
            .count()
    };
    let instagram_win = dimensions
        .iter()
        .find(|r| r.dimension == Dimension::Instagram)
        .and_then(|r| r.engagement)
        .is_some_and(|e| e.winner == Winner::Yours);

    let wins = count(Winner::Yours) + usize::from(instagram_win);
    let losses = count(Winner::Competitor);
    let overall_winner = if wins > losses {
        Winner::Yours
    } else if losses > wins {
        Winner::Competitor
    } else {
        Winner::Tie
    };
    OverallVerdict {
        wins,
        losses,
        overall_winner,
    }
}
