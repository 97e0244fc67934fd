use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficSource {
    GoogleAnalytics,
    Similarweb,
    SearchConsole,
    #[serde(other)]
    Unknown,
}

/// Audience metrics. `avgVisitDuration` is seconds and `bounceRate` a
/// percentage once normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficMetrics {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub monthly_visits: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub avg_visit_duration: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub pages_per_visit: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub bounce_rate: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number_map")]
    pub traffic_sources: BTreeMap<String, f64>,
}

impl TrafficMetrics {
    pub fn is_empty(&self) -> bool {
        self.monthly_visits.is_none()
            && self.avg_visit_duration.is_none()
            && self.pages_per_visit.is_none()
            && self.bounce_rate.is_none()
            && self.traffic_sources.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSummary {
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub source: Option<TrafficSource>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub metrics: Option<TrafficMetrics>,
    #[serde(default, deserialize_with = "serde_utils::text", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TrafficSummary {
    pub fn monthly_visits(&self) -> Option<f64> {
        self.metrics.as_ref().and_then(|m| m.monthly_visits)
    }

    pub fn bounce_rate(&self) -> Option<f64> {
        self.metrics.as_ref().and_then(|m| m.bounce_rate)
    }

    pub fn avg_visit_duration(&self) -> Option<f64> {
        self.metrics.as_ref().and_then(|m| m.avg_visit_duration)
    }
}

/// Search Console aggregates. `ctr` is a percentage once normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConsoleSummary {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub clicks: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub impressions: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub ctr: Option<f64>,
    #[serde(default, alias = "averagePosition", deserialize_with = "serde_utils::number")]
    pub position: Option<f64>,
}

impl SearchConsoleSummary {
    pub fn is_empty(&self) -> bool {
        self.clicks.is_none() && self.impressions.is_none() && self.ctr.is_none() && self.position.is_none()
    }
}
