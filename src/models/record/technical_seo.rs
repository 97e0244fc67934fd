use crate::models::sources::HeadingsInput;
use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsTxtCheck {
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub exists: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub has_sitemap: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapCheck {
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub exists: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslCheck {
    #[serde(rename = "hasSSL", alias = "hasSsl", default, deserialize_with = "serde_utils::flag")]
    pub has_ssl: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagCheck {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub has_title: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub has_description: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub title_length: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub description_length: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub has_canonical: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDataCheck {
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub has_structured_data: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::strings")]
    pub types: Vec<String>,
}

/// Lightweight technical SEO pass. Each check carries a 0-100 sub-score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSeo {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub robots_txt: Option<RobotsTxtCheck>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub sitemap: Option<SitemapCheck>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub ssl: Option<SslCheck>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub meta_tags: Option<MetaTagCheck>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub structured_data: Option<StructuredDataCheck>,
    #[serde(default, deserialize_with = "serde_utils::lenient", skip_serializing_if = "Option::is_none")]
    pub headings: Option<HeadingsInput>,
}

impl TechnicalSeo {
    pub fn robots_score(&self) -> Option<f64> {
        self.robots_txt.as_ref().and_then(|c| c.score)
    }

    pub fn sitemap_score(&self) -> Option<f64> {
        self.sitemap.as_ref().and_then(|c| c.score)
    }

    pub fn ssl_score(&self) -> Option<f64> {
        self.ssl.as_ref().and_then(|c| c.score)
    }

    pub fn meta_tags_score(&self) -> Option<f64> {
        self.meta_tags.as_ref().and_then(|c| c.score)
    }

    pub fn structured_data_score(&self) -> Option<f64> {
        self.structured_data.as_ref().and_then(|c| c.score)
    }

    pub fn has_ssl(&self) -> Option<bool> {
        self.ssl.as_ref().and_then(|c| c.has_ssl)
    }

    pub fn has_sitemap(&self) -> Option<bool> {
        self.sitemap
            .as_ref()
            .and_then(|c| c.exists)
            .or_else(|| self.robots_txt.as_ref().and_then(|c| c.has_sitemap))
    }

    pub fn has_robots_txt(&self) -> Option<bool> {
        self.robots_txt.as_ref().and_then(|c| c.exists)
    }

    pub fn has_structured_data(&self) -> Option<bool> {
        self.structured_data.as_ref().and_then(|c| c.has_structured_data)
    }

    pub fn is_empty(&self) -> bool {
        self.robots_txt.is_none()
            && self.sitemap.is_none()
            && self.ssl.is_none()
            && self.meta_tags.is_none()
            && self.structured_data.is_none()
    }
}
