// Category sub-scores. Every function returns an unrounded 0-100 value, or
// `None` when none of its inputs are available.

use super::vitals::core_vitals_score;
use crate::models::record::NormalizedSiteRecord;
use crate::utils::score_utils::{blend_pair, clamp_score, interpolate, mean};

const PRIMARY_WEIGHT: f64 = 0.6;

// robots, sitemap, ssl, meta tags, structured data
const TECHNICAL_SEO_WEIGHTS: [f64; 5] = [0.2, 0.2, 0.25, 0.25, 0.1];

/// Lighthouse performance, else the performance score PageSpeed reported
/// with its vitals.
pub fn technical(record: &NormalizedSiteRecord) -> Option<f64> {
    let performance = record
        .lighthouse()
        .and_then(|l| l.performance())
        .or_else(|| {
            let mobile = record.pagespeed()?.mobile.as_ref()?;
            [mobile.lab_data.as_ref(), mobile.field_data.as_ref()]
                .into_iter()
                .flatten()
                .find_map(|vitals| vitals.performance_score)
        });
    blend_pair(performance, core_vitals_score(record), PRIMARY_WEIGHT)
}

pub fn user_experience(record: &NormalizedSiteRecord) -> Option<f64> {
    let traffic = record.traffic()?;
    blend_pair(
        traffic.bounce_rate().map(bounce_rate_score),
        traffic.avg_visit_duration().map(session_duration_score),
        PRIMARY_WEIGHT,
    )
}

pub fn seo_health(record: &NormalizedSiteRecord) -> Option<f64> {
    let lighthouse = record.lighthouse()?;
    blend_pair(lighthouse.seo(), lighthouse.accessibility(), PRIMARY_WEIGHT)
}

pub fn search_visibility(record: &NormalizedSiteRecord) -> Option<f64> {
    let console = record.search_console()?;
    let parts: Vec<f64> = [
        console.ctr.map(ctr_score),
        console.position.map(position_score),
        console.impressions.map(impressions_score),
    ]
    .into_iter()
    .flatten()
    .collect();
    mean(&parts)
}

pub fn technical_seo(record: &NormalizedSiteRecord) -> Option<f64> {
    let checks = record.technical_seo()?;
    let scores = [
        checks.robots_score(),
        checks.sitemap_score(),
        checks.ssl_score(),
        checks.meta_tags_score(),
        checks.structured_data_score(),
    ];
    if scores.iter().all(Option::is_none) {
        return None;
    }
    Some(
        scores
            .iter()
            .zip(TECHNICAL_SEO_WEIGHTS)
            .map(|(score, weight)| score.map(clamp_score).unwrap_or(0.0) * weight)
            .sum(),
    )
}

/// Bounce rate in percent.
pub fn bounce_rate_score(bounce_rate: f64) -> f64 {
    match bounce_rate {
        r if r <= 25.0 => 100.0,
        r if r <= 40.0 => 85.0,
        r if r <= 55.0 => 70.0,
        r if r <= 70.0 => 50.0,
        _ => 30.0,
    }
}

/// Average session duration in seconds.
pub fn session_duration_score(seconds: f64) -> f64 {
    match seconds {
        s if s >= 180.0 => 100.0,
        s if s >= 120.0 => 85.0,
        s if s >= 60.0 => 70.0,
        s if s >= 30.0 => 50.0,
        _ => 30.0,
    }
}

/// Click-through rate in percent.
pub fn ctr_score(ctr: f64) -> f64 {
    if ctr >= 3.0 {
        100.0
    } else if ctr >= 1.0 {
        interpolate(ctr, 1.0, 3.0, 25.0, 100.0)
    } else {
        25.0
    }
}

pub fn position_score(position: f64) -> f64 {
    if position <= 10.0 {
        100.0
    } else if position <= 30.0 {
        interpolate(position, 10.0, 30.0, 100.0, 25.0)
    } else {
        25.0
    }
}

pub fn impressions_score(impressions: f64) -> f64 {
    (impressions / 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_edges() {
        assert_eq!(bounce_rate_score(25.0), 100.0);
        assert_eq!(bounce_rate_score(25.5), 85.0);
        assert_eq!(bounce_rate_score(71.0), 30.0);
        assert_eq!(session_duration_score(180.0), 100.0);
        assert_eq!(session_duration_score(59.0), 50.0);
        assert_eq!(session_duration_score(5.0), 30.0);
    }

    #[test]
    fn search_console_curves() {
        assert_eq!(ctr_score(2.0), 62.5);
        assert_eq!(ctr_score(0.4), 25.0);
        assert_eq!(position_score(20.0), 62.5);
        assert_eq!(position_score(45.0), 25.0);
        assert_eq!(impressions_score(4200.0), 42.0);
        assert_eq!(impressions_score(50_000.0), 100.0);
    }
}
