use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    /// Legacy three-category scoring.
    Basic,
    #[default]
    Enhanced,
}

impl ScoreMode {
    pub fn weights(&self) -> &'static [(ScoreCategory, f64)] {
        match self {
            ScoreMode::Basic => &[
                (ScoreCategory::Technical, 0.40),
                (ScoreCategory::UserExperience, 0.35),
                (ScoreCategory::SeoHealth, 0.25),
            ],
            ScoreMode::Enhanced => &[
                (ScoreCategory::Technical, 0.25),
                (ScoreCategory::UserExperience, 0.20),
                (ScoreCategory::SeoHealth, 0.20),
                (ScoreCategory::SearchVisibility, 0.20),
                (ScoreCategory::TechnicalSeo, 0.15),
            ],
        }
    }
}

impl std::str::FromStr for ScoreMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "legacy" => Ok(ScoreMode::Basic),
            "enhanced" => Ok(ScoreMode::Enhanced),
            other => Err(format!("unknown score mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreCategory {
    #[serde(rename = "technical")]
    Technical,
    #[serde(rename = "userExperience")]
    UserExperience,
    #[serde(rename = "seoHealth")]
    SeoHealth,
    #[serde(rename = "searchVisibility")]
    SearchVisibility,
    #[serde(rename = "technicalSEO")]
    TechnicalSeo,
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreCategory::Technical => "technical",
            ScoreCategory::UserExperience => "userExperience",
            ScoreCategory::SeoHealth => "seoHealth",
            ScoreCategory::SearchVisibility => "searchVisibility",
            ScoreCategory::TechnicalSeo => "technicalSEO",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: ScoreCategory,
    pub value: Option<u32>,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    High,
    Medium,
    Limited,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuality {
    pub available_sources: usize,
    pub total_sources: usize,
    pub completeness: f64,
    pub level: QualityLevel,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall: Option<u32>,
    pub breakdown: BTreeMap<ScoreCategory, Option<u32>>,
    pub categories: Vec<CategoryScore>,
    pub mode: ScoreMode,
    pub data_quality: DataQuality,
}

impl ScoreResult {
    pub fn category(&self, category: ScoreCategory) -> Option<u32> {
        self.breakdown.get(&category).copied().flatten()
    }
}
