use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};

/// Canonical meta-tag view, whichever shape the provider emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTags {
    pub has_title: bool,
    pub has_description: bool,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingCounts {
    pub h1_count: u32,
    pub h2_count: u32,
    pub h3_count: u32,
}

impl HeadingCounts {
    pub fn is_empty(&self) -> bool {
        self.h1_count == 0 && self.h2_count == 0 && self.h3_count == 0
    }
}

/// On-page SEO facts after the richest-source-wins merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSnapshot {
    pub meta_tags: MetaTags,
    pub canonical: bool,
    pub title_length: Option<u32>,
    pub description_length: Option<u32>,
    pub headings: HeadingCounts,
    pub open_graph: bool,
    pub twitter_card: bool,
    pub structured_data_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStats {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub without_alt: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub internal: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub external: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStats {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub word_count: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub paragraph_count: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub images: Option<ImageStats>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub links: Option<LinkStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyStack {
    #[serde(default, deserialize_with = "serde_utils::text")]
    pub cms: Option<String>,
    #[serde(default, deserialize_with = "serde_utils::strings")]
    pub frameworks: Vec<String>,
    #[serde(default, deserialize_with = "serde_utils::strings")]
    pub analytics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPosture {
    #[serde(rename = "isHTTPS", alias = "isHttps", default, deserialize_with = "serde_utils::flag")]
    pub is_https: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::text")]
    pub cdn: Option<String>,
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub mixed_content: Option<bool>,
}

impl SecurityPosture {
    pub fn has_cdn(&self) -> bool {
        self.cdn
            .as_deref()
            .map(|cdn| !matches!(cdn.to_ascii_lowercase().as_str(), "none" | "false" | "unknown"))
            .unwrap_or(false)
    }
}

/// Full-page browser scan, normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageScan {
    pub seo: Option<SeoSnapshot>,
    pub content: Option<ContentStats>,
    pub technology: Option<TechnologyStack>,
    pub security: Option<SecurityPosture>,
    pub robots_txt: Option<bool>,
    pub sitemap: Option<bool>,
}

impl PageScan {
    pub fn word_count(&self) -> Option<f64> {
        self.content.as_ref().and_then(|c| c.word_count)
    }

    pub fn is_empty(&self) -> bool {
        self.seo.is_none()
            && self.content.is_none()
            && self.technology.is_none()
            && self.security.is_none()
            && self.robots_txt.is_none()
            && self.sitemap.is_none()
    }
}
