use crate::models::lighthouse::{
    Categories, Category, LighthouseInput, LighthouseReport, LighthouseSummaryInput,
};
use crate::models::record::{CategoryScores, LighthouseSummary, ScorePair, VitalMetric};
use crate::utils::serde_utils::{number_of, text_of};
use serde_json::Value;
use std::collections::BTreeMap;

// Report audit id -> canonical vital key. Earlier entries win for a key.
const VITAL_AUDITS: [(&str, &str); 9] = [
    ("largest-contentful-paint", "lcp"),
    ("first-input-delay", "fid"),
    ("max-potential-fid", "fid"),
    ("interaction-to-next-paint", "inp"),
    ("experimental-interaction-to-next-paint", "inp"),
    ("cumulative-layout-shift", "cls"),
    ("first-contentful-paint", "fcp"),
    ("total-blocking-time", "tbt"),
    ("speed-index", "speedIndex"),
];

// Audits scoring at or above this are not worth listing as opportunities.
const OPPORTUNITY_SCORE_CEILING: f64 = 0.9;

pub fn normalize_lighthouse(input: &LighthouseInput) -> LighthouseSummary {
    match input {
        LighthouseInput::Summary(summary) => from_summary(summary),
        LighthouseInput::Report(report) => from_report(report),
    }
}

fn from_report(report: &LighthouseReport) -> LighthouseSummary {
    let mut core_web_vitals = BTreeMap::new();
    for (audit_id, key) in VITAL_AUDITS {
        if let Some(audit) = report.audits.get(audit_id) {
            if audit.numeric_value.is_none() && audit.display_value.is_none() {
                continue;
            }
            core_web_vitals
                .entry(key.to_string())
                .or_insert_with(|| VitalMetric {
                    value: audit.numeric_value.filter(|v| *v >= 0.0),
                    display_value: audit.display_value.clone(),
                    score: audit.score.map(|s| s.clamp(0.0, 1.0)),
                });
        }
    }

    let opportunities = report
        .audits
        .iter()
        .filter(|(_, audit)| audit.is_opportunity())
        .filter(|(_, audit)| {
            audit
                .score
                .map(|s| s < OPPORTUNITY_SCORE_CEILING)
                .unwrap_or(false)
        })
        .map(|(id, audit)| audit.title.clone().unwrap_or_else(|| id.clone()))
        .collect();

    LighthouseSummary {
        category_scores: report_categories(&report.categories),
        core_web_vitals,
        opportunities,
    }
}

fn report_categories(categories: &Categories) -> CategoryScores {
    let pair = |category: &Option<Category>| {
        category
            .as_ref()
            .and_then(|c| c.score)
            .map(ScorePair::from_fraction)
    };
    CategoryScores {
        performance: pair(&categories.performance),
        accessibility: pair(&categories.accessibility),
        best_practices: pair(&categories.best_practices),
        seo: pair(&categories.seo),
    }
}

fn from_summary(summary: &LighthouseSummaryInput) -> LighthouseSummary {
    let scores = &summary.category_scores;
    let category_scores = CategoryScores {
        performance: scores.performance.map(ScorePair::from_display),
        accessibility: scores.accessibility.map(ScorePair::from_display),
        best_practices: scores.best_practices.map(ScorePair::from_display),
        seo: scores.seo.map(ScorePair::from_display),
    };

    let mut core_web_vitals = BTreeMap::new();
    for (raw_key, value) in &summary.core_web_vitals {
        if let Some(metric) = metric_of(value) {
            core_web_vitals
                .entry(canonical_vital_key(raw_key))
                .or_insert(metric);
        }
    }

    let opportunities = summary
        .opportunities
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(map) => map
                .get("title")
                .and_then(text_of)
                .or_else(|| text_of(entry)),
            other => text_of(other),
        })
        .collect();

    LighthouseSummary {
        category_scores,
        core_web_vitals,
        opportunities,
    }
}

fn metric_of(value: &Value) -> Option<VitalMetric> {
    let metric = match value {
        Value::Object(map) => VitalMetric {
            value: ["value", "numericValue"]
                .iter()
                .find_map(|key| map.get(*key).and_then(number_of)),
            display_value: map.get("displayValue").and_then(text_of),
            score: map.get("score").and_then(number_of).map(|s| s.clamp(0.0, 1.0)),
        },
        other => VitalMetric {
            value: number_of(other),
            ..Default::default()
        },
    };
    let metric = VitalMetric {
        value: metric.value.filter(|v| *v >= 0.0),
        ..metric
    };
    if metric.value.is_none() && metric.display_value.is_none() {
        None
    } else {
        Some(metric)
    }
}

/// Map the many spellings of a vital name onto `lcp`, `fid`, `inp`, `cls`,
/// `fcp`, `tbt` or `speedIndex`. Unknown names pass through unchanged.
pub fn canonical_vital_key(raw: &str) -> String {
    let squashed: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    let key = match squashed.as_str() {
        "lcp" | "largestcontentfulpaint" => "lcp",
        "fid" | "firstinputdelay" | "maxpotentialfid" => "fid",
        "inp" | "interactiontonextpaint" => "inp",
        "cls" | "cumulativelayoutshift" => "cls",
        "fcp" | "firstcontentfulpaint" => "fcp",
        "tbt" | "totalblockingtime" => "tbt",
        "si" | "speedindex" => "speedIndex",
        _ => return raw.to_string(),
    };
    key.to_string()
}
