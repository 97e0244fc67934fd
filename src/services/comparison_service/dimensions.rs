// One function per comparison dimension. Each returns `None` when the
// dimension has nothing to compare.

use super::rubric::{security_score, seo_rubric_score};
use crate::models::comparison::{
    BacklinksSide, ComparisonResult, ContentSide, ContentUpdatesSide, Dimension, PerformanceSide,
    Reported, SecuritySide, SeoSide, SideMetrics, SocialSide, SubComparison, TrafficSide, Winner,
};
use crate::models::record::{NormalizedSiteRecord, SocialMetrics};

pub const PERFORMANCE_POINTS: f64 = 10.0;
pub const SEO_POINTS: f64 = 5.0;
pub const BACKLINKS: f64 = 100.0;
pub const CONTENT_WORDS: f64 = 300.0;
pub const TRAFFIC_VISITS: f64 = 1000.0;
pub const POSTS_PER_MONTH: f64 = 2.0;
pub const ENGAGEMENT_POINTS: f64 = 1.0;
pub const SECURITY_POINTS: f64 = 20.0;

/// Gaps count only when strictly larger than the threshold.
pub fn is_significant(difference: f64, threshold: f64) -> bool {
    difference.abs() > threshold
}

fn numeric(
    dimension: Dimension,
    (yours_kpi, competitor_kpi): (f64, f64),
    threshold: f64,
    yours: SideMetrics,
    competitor: SideMetrics,
) -> ComparisonResult {
    let difference = yours_kpi - competitor_kpi;
    ComparisonResult {
        dimension,
        winner: Winner::from_difference(difference),
        difference: Some(difference),
        significant: is_significant(difference, threshold),
        yours,
        competitor,
        followers: None,
        engagement: None,
    }
}

fn performance_side(record: &NormalizedSiteRecord) -> Option<PerformanceSide> {
    let lighthouse = record.lighthouse()?;
    let score = lighthouse.category_scores.performance?.display_value;
    Some(PerformanceSide {
        score,
        lcp: lighthouse.vital("lcp"),
        cls: lighthouse.vital("cls"),
        opportunities: lighthouse.opportunities.len(),
    })
}

pub fn performance(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> Option<ComparisonResult> {
    let ours = performance_side(yours)?;
    let theirs = performance_side(competitor)?;
    let kpis = (ours.score as f64, theirs.score as f64);
    Some(numeric(
        Dimension::Performance,
        kpis,
        PERFORMANCE_POINTS,
        SideMetrics::Performance(ours),
        SideMetrics::Performance(theirs),
    ))
}

fn seo_side(record: &NormalizedSiteRecord) -> Option<SeoSide> {
    let seo = record.seo.as_ref()?;
    Some(SeoSide {
        score: seo_rubric_score(seo),
        lighthouse_seo: record
            .lighthouse()
            .and_then(|l| l.category_scores.seo)
            .map(|s| s.display_value),
        meta_tags: seo.meta_tags.clone(),
        headings: seo.headings,
        open_graph: seo.open_graph,
        twitter_card: seo.twitter_card,
        structured_data_count: seo.structured_data_count,
    })
}

pub fn seo(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> Option<ComparisonResult> {
    let ours = seo_side(yours)?;
    let theirs = seo_side(competitor)?;
    let kpis = (ours.score as f64, theirs.score as f64);
    Some(numeric(
        Dimension::Seo,
        kpis,
        SEO_POINTS,
        SideMetrics::Seo(ours),
        SideMetrics::Seo(theirs),
    ))
}

fn backlinks_side(record: &NormalizedSiteRecord) -> Option<BacklinksSide> {
    let backlinks = record.backlinks()?;
    Some(BacklinksSide {
        total_backlinks: backlinks.total_backlinks?,
        referring_domains: backlinks.referring_domains,
    })
}

pub fn backlinks(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> Option<ComparisonResult> {
    let ours = backlinks_side(yours)?;
    let theirs = backlinks_side(competitor)?;
    let kpis = (ours.total_backlinks, theirs.total_backlinks);
    Some(numeric(
        Dimension::Backlinks,
        kpis,
        BACKLINKS,
        SideMetrics::Backlinks(ours),
        SideMetrics::Backlinks(theirs),
    ))
}

fn content_side(record: &NormalizedSiteRecord) -> Option<ContentSide> {
    let content = record.page_scan()?.content.as_ref()?;
    Some(ContentSide {
        word_count: content.word_count?,
        paragraph_count: content.paragraph_count,
        images: content.images.as_ref().and_then(|i| i.total),
        internal_links: content.links.as_ref().and_then(|l| l.internal),
    })
}

pub fn content(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> Option<ComparisonResult> {
    let ours = content_side(yours)?;
    let theirs = content_side(competitor)?;
    let kpis = (ours.word_count, theirs.word_count);
    Some(numeric(
        Dimension::Content,
        kpis,
        CONTENT_WORDS,
        SideMetrics::Content(ours),
        SideMetrics::Content(theirs),
    ))
}

fn traffic_side(record: &NormalizedSiteRecord) -> Option<TrafficSide> {
    let traffic = record.traffic()?;
    let metrics = traffic.metrics.as_ref();
    Some(TrafficSide {
        monthly_visits: metrics.and_then(|m| m.monthly_visits).into(),
        avg_visit_duration: metrics.and_then(|m| m.avg_visit_duration).into(),
        pages_per_visit: metrics.and_then(|m| m.pages_per_visit).into(),
        bounce_rate: metrics.and_then(|m| m.bounce_rate).into(),
        source: traffic.source.into(),
    })
}

fn traffic_placeholder() -> TrafficSide {
    TrafficSide {
        monthly_visits: Reported::NotAvailable,
        avg_visit_duration: Reported::NotAvailable,
        pages_per_visit: Reported::NotAvailable,
        bounce_rate: Reported::NotAvailable,
        source: Reported::NotAvailable,
    }
}

/// Emitted when either side has traffic data. `difference` is
/// competitor minus yours; the winner is the side with more visits.
pub fn traffic(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> Option<ComparisonResult> {
    let (ours, theirs) = match (traffic_side(yours), traffic_side(competitor)) {
        (None, None) => return None,
        (ours, theirs) => (
            ours.unwrap_or_else(traffic_placeholder),
            theirs.unwrap_or_else(traffic_placeholder),
        ),
    };
    let (winner, difference) = match (ours.monthly_visits.value(), theirs.monthly_visits.value()) {
        (Some(&y), Some(&c)) => (Winner::from_difference(y - c), Some(c - y)),
        _ => (Winner::Tie, None),
    };
    Some(ComparisonResult {
        dimension: Dimension::Traffic,
        winner,
        difference,
        significant: difference.is_some_and(|d| is_significant(d, TRAFFIC_VISITS)),
        yours: SideMetrics::Traffic(ours),
        competitor: SideMetrics::Traffic(theirs),
        followers: None,
        engagement: None,
    })
}

fn content_updates_side(record: &NormalizedSiteRecord) -> Option<ContentUpdatesSide> {
    let updates = record.content_updates()?;
    let activity = updates.content_activity.as_ref();
    Some(ContentUpdatesSide {
        average_posts_per_month: updates.posts_per_month().into(),
        recent_posts: updates.rss.as_ref().and_then(|r| r.recent_posts).into(),
        last_content_date: updates.last_content_date().into(),
        content_velocity: activity.and_then(|a| a.content_velocity).into(),
        is_active: activity.and_then(|a| a.is_active).into(),
    })
}

fn content_updates_placeholder() -> ContentUpdatesSide {
    ContentUpdatesSide {
        average_posts_per_month: Reported::NotAvailable,
        recent_posts: Reported::NotAvailable,
        last_content_date: Reported::NotAvailable,
        content_velocity: Reported::NotAvailable,
        is_active: Reported::NotAvailable,
    }
}

pub fn content_updates(
    yours: &NormalizedSiteRecord,
    competitor: &NormalizedSiteRecord,
) -> Option<ComparisonResult> {
    let (ours, theirs) = match (content_updates_side(yours), content_updates_side(competitor)) {
        (None, None) => return None,
        (ours, theirs) => (
            ours.unwrap_or_else(content_updates_placeholder),
            theirs.unwrap_or_else(content_updates_placeholder),
        ),
    };
    let difference = match (
        ours.average_posts_per_month.value(),
        theirs.average_posts_per_month.value(),
    ) {
        (Some(&y), Some(&c)) => Some(y - c),
        _ => None,
    };
    Some(ComparisonResult {
        dimension: Dimension::ContentUpdates,
        winner: difference.map(Winner::from_difference).unwrap_or(Winner::Tie),
        difference,
        significant: difference.is_some_and(|d| is_significant(d, POSTS_PER_MONTH)),
        yours: SideMetrics::ContentUpdates(ours),
        competitor: SideMetrics::ContentUpdates(theirs),
        followers: None,
        engagement: None,
    })
}

/// Engagement rate when both sides report it, else interactions per post.
fn engagement_pair(yours: &SocialMetrics, competitor: &SocialMetrics) -> Option<(f64, f64)> {
    let rate = |m: &SocialMetrics| m.profile.as_ref().and_then(|p| p.avg_engagement_rate);
    let interactions = |m: &SocialMetrics| {
        m.engagement
            .as_ref()
            .and_then(|e| e.summary.as_ref())
            .and_then(|s| s.avg_interactions_per_post)
    };
    match (rate(yours), rate(competitor)) {
        (Some(y), Some(c)) => Some((y, c)),
        _ => Some((interactions(yours)?, interactions(competitor)?)),
    }
}

fn social_side(metrics: &SocialMetrics, engagement: f64) -> SocialSide {
    SocialSide {
        followers: metrics.followers(),
        engagement,
        verified: metrics.profile.as_ref().and_then(|p| p.verified),
    }
}

fn social(
    dimension: Dimension,
    yours: Option<&SocialMetrics>,
    competitor: Option<&SocialMetrics>,
) -> Option<ComparisonResult> {
    let (yours, competitor) = (yours?, competitor?);
    let (ours, theirs) = engagement_pair(yours, competitor)?;
    let engagement = SubComparison::new(ours, theirs);
    let followers = match (yours.followers(), competitor.followers()) {
        (Some(y), Some(c)) => Some(SubComparison::new(y, c)),
        _ => None,
    };
    Some(ComparisonResult {
        dimension,
        winner: engagement.winner,
        difference: Some(engagement.difference),
        significant: is_significant(engagement.difference, ENGAGEMENT_POINTS),
        yours: SideMetrics::Social(social_side(yours, ours)),
        competitor: SideMetrics::Social(social_side(competitor, theirs)),
        followers,
        engagement: Some(engagement),
    })
}

pub fn instagram(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> Option<ComparisonResult> {
    social(Dimension::Instagram, yours.instagram(), competitor.instagram())
}

pub fn facebook(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> Option<ComparisonResult> {
    social(Dimension::Facebook, yours.facebook(), competitor.facebook())
}

/// Tie unless exactly one side runs analytics.
pub fn technology(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> Option<ComparisonResult> {
    let ours = yours.page_scan()?.technology.clone()?;
    let theirs = competitor.page_scan()?.technology.clone()?;
    let winner = match (ours.analytics.is_empty(), theirs.analytics.is_empty()) {
        (true, false) => Winner::Competitor,
        (false, true) => Winner::Yours,
        _ => Winner::Tie,
    };
    Some(ComparisonResult {
        dimension: Dimension::Technology,
        winner,
        difference: None,
        significant: winner != Winner::Tie,
        yours: SideMetrics::Technology(ours),
        competitor: SideMetrics::Technology(theirs),
        followers: None,
        engagement: None,
    })
}

fn security_side(record: &NormalizedSiteRecord) -> Option<SecuritySide> {
    let posture = record.page_scan()?.security.as_ref()?;
    let is_https = posture
        .is_https
        .or_else(|| record.technical_seo().and_then(|t| t.has_ssl()))
        .unwrap_or(false);
    Some(SecuritySide {
        score: security_score(posture, is_https),
        is_https,
        has_cdn: posture.has_cdn(),
        mixed_content: posture.mixed_content.unwrap_or(false),
    })
}

pub fn security(yours: &NormalizedSiteRecord, competitor: &NormalizedSiteRecord) -> Option<ComparisonResult> {
    let ours = security_side(yours)?;
    let theirs = security_side(competitor)?;
    let kpis = (ours.score as f64, theirs.score as f64);
    Some(numeric(
        Dimension::Security,
        kpis,
        SECURITY_POINTS,
        SideMetrics::Security(ours),
        SideMetrics::Security(theirs),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_must_exceed_threshold() {
        assert!(!is_significant(10.0, PERFORMANCE_POINTS));
        assert!(is_significant(10.01, PERFORMANCE_POINTS));
        assert!(is_significant(-10.01, PERFORMANCE_POINTS));
        assert!(!is_significant(-100.0, BACKLINKS));
    }
}
