use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::{Categories, CategoryScoresInput};
use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Raw Lighthouse JSON report (`lighthouse --output=json`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseReport {
    #[serde(default, deserialize_with = "serde_utils::text")]
    pub requested_url: Option<String>,
    #[serde(deserialize_with = "serde_utils::lenient_or_default")]
    pub categories: Categories,
    #[serde(default, deserialize_with = "serde_utils::entries")]
    pub audits: BTreeMap<String, Audit>,
}

/// Summary shape produced by collaborators that already flattened a report.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseSummaryInput {
    #[serde(deserialize_with = "serde_utils::lenient_or_default")]
    pub category_scores: CategoryScoresInput,
    #[serde(default, deserialize_with = "serde_utils::lenient_or_default")]
    pub core_web_vitals: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "serde_utils::values")]
    pub opportunities: Vec<Value>,
}

/// The two Lighthouse payload shapes, told apart by their required block
/// (`categoryScores` vs `categories`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum LighthouseInput {
    Summary(LighthouseSummaryInput),
    Report(LighthouseReport),
}
