// Unit and range fixes applied to each provider payload after parsing.

use crate::models::record::{
    Backlinks, ContentUpdates, ContentVelocity, PageSpeed, PageSpeedStrategy, SearchConsoleSummary,
    SocialMetrics, TechnicalSeo, TrafficSummary, Vitals,
};
use crate::utils::score_utils::clamp_score;
use log::debug;

fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v >= 0.0)
}

/// Values at or below 1 are read as fractions of 1 and scaled to percent.
fn as_percentage(value: Option<f64>) -> Option<f64> {
    non_negative(value).map(|v| {
        let percent = if v <= 1.0 { v * 100.0 } else { v };
        percent.min(100.0)
    })
}

fn score_range(value: Option<f64>) -> Option<f64> {
    value.map(clamp_score)
}

fn vitals(vitals: &Vitals) -> Vitals {
    Vitals {
        lcp: non_negative(vitals.lcp),
        fid: non_negative(vitals.fid),
        inp: non_negative(vitals.inp),
        cls: non_negative(vitals.cls),
        fcp: non_negative(vitals.fcp),
        performance_score: as_percentage(vitals.performance_score),
    }
}

fn strategy(strategy: &PageSpeedStrategy) -> PageSpeedStrategy {
    PageSpeedStrategy {
        field_data: strategy.field_data.as_ref().map(vitals),
        lab_data: strategy.lab_data.as_ref().map(vitals),
    }
}

pub fn pagespeed(input: &PageSpeed) -> PageSpeed {
    PageSpeed {
        mobile: input.mobile.as_ref().map(strategy),
        desktop: input.desktop.as_ref().map(strategy),
    }
}

pub fn technical_seo(input: &TechnicalSeo) -> TechnicalSeo {
    let mut out = input.clone();
    if let Some(check) = out.robots_txt.as_mut() {
        check.score = score_range(check.score);
    }
    if let Some(check) = out.sitemap.as_mut() {
        check.score = score_range(check.score);
    }
    if let Some(check) = out.ssl.as_mut() {
        check.score = score_range(check.score);
    }
    if let Some(check) = out.meta_tags.as_mut() {
        check.score = score_range(check.score);
        check.title_length = non_negative(check.title_length);
        check.description_length = non_negative(check.description_length);
    }
    if let Some(check) = out.structured_data.as_mut() {
        check.score = score_range(check.score);
    }
    out
}

/// A traffic payload that reports `success: false` is a failed source.
pub fn traffic(input: &TrafficSummary) -> Result<TrafficSummary, String> {
    if input.success == Some(false) {
        return Err(input
            .error
            .clone()
            .unwrap_or_else(|| "traffic provider reported failure".to_string()));
    }
    let mut out = input.clone();
    if let Some(metrics) = out.metrics.as_mut() {
        if let Some(rate) = metrics.bounce_rate.filter(|r| *r >= 0.0 && *r <= 1.0) {
            debug!("Treating bounce rate {} as a fraction", rate);
        }
        metrics.monthly_visits = non_negative(metrics.monthly_visits);
        metrics.avg_visit_duration = non_negative(metrics.avg_visit_duration);
        metrics.pages_per_visit = non_negative(metrics.pages_per_visit);
        metrics.bounce_rate = as_percentage(metrics.bounce_rate);
        metrics.traffic_sources.retain(|_, share| *share >= 0.0);
    }
    Ok(out)
}

pub fn search_console(input: &SearchConsoleSummary) -> SearchConsoleSummary {
    SearchConsoleSummary {
        clicks: non_negative(input.clicks),
        impressions: non_negative(input.impressions),
        ctr: as_percentage(input.ctr),
        position: input.position.filter(|p| *p >= 1.0),
    }
}

pub fn content_updates(input: &ContentUpdates) -> ContentUpdates {
    let mut out = input.clone();
    if let Some(rss) = out.rss.as_mut() {
        rss.recent_posts = non_negative(rss.recent_posts);
        rss.total_posts = non_negative(rss.total_posts);
    }
    if let Some(sitemap) = out.sitemap.as_mut() {
        sitemap.recently_modified = non_negative(sitemap.recently_modified);
    }
    if let Some(activity) = out.content_activity.as_mut() {
        activity.average_posts_per_month = non_negative(activity.average_posts_per_month);
        activity.recent_activity_count = non_negative(activity.recent_activity_count);
        let supplied = activity
            .content_velocity
            .filter(|v| *v != ContentVelocity::Unknown);
        activity.content_velocity = supplied.or_else(|| {
            activity
                .average_posts_per_month
                .map(ContentVelocity::from_posts_per_month)
        });
    }
    out
}

pub fn backlinks(input: &Backlinks) -> Backlinks {
    Backlinks {
        total_backlinks: non_negative(input.total_backlinks),
        referring_domains: non_negative(input.referring_domains),
    }
}

pub fn social(input: &SocialMetrics) -> SocialMetrics {
    let mut out = input.clone();
    if let Some(profile) = out.profile.as_mut() {
        profile.followers = non_negative(profile.followers);
        profile.avg_engagement_rate = non_negative(profile.avg_engagement_rate);
        profile.quality_score = score_range(profile.quality_score);
    }
    if let Some(summary) = out.engagement.as_mut().and_then(|e| e.summary.as_mut()) {
        summary.avg_likes_per_post = non_negative(summary.avg_likes_per_post);
        summary.avg_comments_per_post = non_negative(summary.avg_comments_per_post);
        summary.avg_interactions_per_post = non_negative(summary.avg_interactions_per_post);
    }
    out
}
