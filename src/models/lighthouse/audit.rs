use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};

// Individual audit result of a raw Lighthouse report
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub numeric_value: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::text")]
    pub display_value: Option<String>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub details: Option<AuditDetails>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AuditDetails {
    #[serde(rename = "type", default, deserialize_with = "serde_utils::text")]
    pub kind: Option<String>,
}

impl Audit {
    pub fn is_opportunity(&self) -> bool {
        self.details
            .as_ref()
            .and_then(|d| d.kind.as_deref())
            .map(|kind| kind == "opportunity")
            .unwrap_or(false)
    }
}
