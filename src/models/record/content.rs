use crate::utils::serde_utils;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentVelocity {
    High,
    Medium,
    Low,
    Minimal,
    #[serde(other)]
    Unknown,
}

impl ContentVelocity {
    pub fn from_posts_per_month(posts: f64) -> Self {
        if posts >= 8.0 {
            ContentVelocity::High
        } else if posts >= 4.0 {
            ContentVelocity::Medium
        } else if posts >= 1.0 {
            ContentVelocity::Low
        } else {
            ContentVelocity::Minimal
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RssFeed {
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub found: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub recent_posts: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub total_posts: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::date")]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapActivity {
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub found: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub recently_modified: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::date")]
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentActivity {
    #[serde(default, deserialize_with = "serde_utils::text")]
    pub update_frequency: Option<String>,
    #[serde(default, deserialize_with = "serde_utils::date")]
    pub last_content_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub average_posts_per_month: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub content_velocity: Option<ContentVelocity>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub recent_activity_count: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUpdates {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub rss: Option<RssFeed>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub sitemap: Option<SitemapActivity>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub content_activity: Option<ContentActivity>,
}

impl ContentUpdates {
    pub fn posts_per_month(&self) -> Option<f64> {
        self.content_activity
            .as_ref()
            .and_then(|a| a.average_posts_per_month)
    }

    /// Most recent content signal across activity, feed and sitemap.
    pub fn last_content_date(&self) -> Option<DateTime<Utc>> {
        [
            self.content_activity.as_ref().and_then(|a| a.last_content_date),
            self.rss.as_ref().and_then(|r| r.last_updated),
            self.sitemap.as_ref().and_then(|s| s.last_modified),
        ]
        .into_iter()
        .flatten()
        .max()
    }

    pub fn is_empty(&self) -> bool {
        self.rss.is_none() && self.sitemap.is_none() && self.content_activity.is_none()
    }
}
