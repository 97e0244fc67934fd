use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backlinks {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub total_backlinks: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub referring_domains: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub followers: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub verified: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub avg_engagement_rate: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub quality_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSummary {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub avg_likes_per_post: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub avg_comments_per_post: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub avg_interactions_per_post: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::text")]
    pub consistency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingPattern {
    #[serde(default, deserialize_with = "serde_utils::strings")]
    pub best_days: Vec<String>,
    #[serde(default, deserialize_with = "serde_utils::values")]
    pub best_hours: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub summary: Option<EngagementSummary>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub posting_pattern: Option<PostingPattern>,
}

/// Instagram / Facebook account summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetrics {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub profile: Option<SocialProfile>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub engagement: Option<Engagement>,
}

impl SocialMetrics {
    pub fn followers(&self) -> Option<f64> {
        self.profile.as_ref().and_then(|p| p.followers)
    }

    /// Engagement rate when reported, else average interactions per post.
    pub fn engagement_kpi(&self) -> Option<f64> {
        self.profile
            .as_ref()
            .and_then(|p| p.avg_engagement_rate)
            .or_else(|| {
                self.engagement
                    .as_ref()
                    .and_then(|e| e.summary.as_ref())
                    .and_then(|s| s.avg_interactions_per_post)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.followers().is_none() && self.engagement_kpi().is_none()
    }
}
