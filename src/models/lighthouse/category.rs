use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};

// Category score as Lighthouse reports it: a 0-1 fraction.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Category {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub score: Option<f64>,
}

// Categories block of a raw Lighthouse report.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Categories {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub performance: Option<Category>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub accessibility: Option<Category>,
    #[serde(
        rename = "best-practices",
        alias = "bestPractices",
        alias = "best_practices",
        default,
        deserialize_with = "serde_utils::lenient"
    )]
    pub best_practices: Option<Category>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub seo: Option<Category>,
}

// Already-converted 0-100 category scores some collaborators send instead.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScoresInput {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub performance: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub accessibility: Option<f64>,
    #[serde(default, alias = "best-practices", deserialize_with = "serde_utils::number")]
    pub best_practices: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub seo: Option<f64>,
}
