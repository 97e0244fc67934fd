use crate::utils::score_utils::{clamp_score, fraction_to_display};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A category score in both representations consumers expect:
/// `score` on the 0-1 scale and `displayValue` on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePair {
    pub score: f64,
    pub display_value: u32,
}

impl ScorePair {
    pub fn from_fraction(fraction: f64) -> Self {
        Self::from_display_value(fraction_to_display(fraction))
    }

    pub fn from_display(value: f64) -> Self {
        Self::from_display_value(clamp_score(value).round() as u32)
    }

    fn from_display_value(display_value: u32) -> Self {
        ScorePair {
            score: display_value as f64 / 100.0,
            display_value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub performance: Option<ScorePair>,
    pub accessibility: Option<ScorePair>,
    pub best_practices: Option<ScorePair>,
    pub seo: Option<ScorePair>,
}

impl CategoryScores {
    pub fn is_empty(&self) -> bool {
        self.performance.is_none()
            && self.accessibility.is_none()
            && self.best_practices.is_none()
            && self.seo.is_none()
    }
}

/// One timing metric. `value` is milliseconds, except CLS which is unitless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalMetric {
    pub value: Option<f64>,
    pub display_value: Option<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseSummary {
    pub category_scores: CategoryScores,
    pub core_web_vitals: BTreeMap<String, VitalMetric>,
    pub opportunities: Vec<String>,
}

impl LighthouseSummary {
    pub fn performance(&self) -> Option<f64> {
        self.category_scores.performance.map(|s| s.display_value as f64)
    }

    pub fn accessibility(&self) -> Option<f64> {
        self.category_scores.accessibility.map(|s| s.display_value as f64)
    }

    pub fn seo(&self) -> Option<f64> {
        self.category_scores.seo.map(|s| s.display_value as f64)
    }

    pub fn vital(&self, key: &str) -> Option<f64> {
        self.core_web_vitals.get(key).and_then(|m| m.value)
    }

    pub fn is_empty(&self) -> bool {
        self.category_scores.is_empty() && self.core_web_vitals.is_empty()
    }
}
