use crate::models::record::{ContentStats, HeadingCounts, SecurityPosture, TechnologyStack};
use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{exists, content}` pair used by the nested meta-tag shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagState {
    #[serde(default, deserialize_with = "serde_utils::flag")]
    pub exists: Option<bool>,
    #[serde(default, deserialize_with = "serde_utils::text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub length: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedMetaTags {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub title: Option<MetaTagState>,
    #[serde(alias = "description")]
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub meta_description: Option<MetaTagState>,
    #[serde(default)]
    pub canonical: Option<Value>,
}

/// Heading data as counts (`h1Count`) or as lists of heading texts (`h1`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingsInput {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub h1_count: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub h2_count: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub h3_count: Option<f64>,
    #[serde(default)]
    pub h1: Option<Value>,
    #[serde(default)]
    pub h2: Option<Value>,
    #[serde(default)]
    pub h3: Option<Value>,
}

impl HeadingsInput {
    pub fn counts(&self) -> HeadingCounts {
        HeadingCounts {
            h1_count: heading_count(self.h1_count, self.h1.as_ref()),
            h2_count: heading_count(self.h2_count, self.h2.as_ref()),
            h3_count: heading_count(self.h3_count, self.h3.as_ref()),
        }
    }
}

fn heading_count(count: Option<f64>, list: Option<&Value>) -> u32 {
    if let Some(count) = count {
        return count.max(0.0).round() as u32;
    }
    match list {
        Some(Value::Array(items)) => items.len() as u32,
        Some(other) => serde_utils::number_of(other)
            .map(|n| n.max(0.0).round() as u32)
            .unwrap_or(0),
        None => 0,
    }
}

/// SEO block of a page scan. Providers emit meta tags either nested under
/// `metaTags` or flat as `title`/`metaDescription`; see [`MetaShape`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoInput {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub meta_tags: Option<NestedMetaTags>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default, alias = "description")]
    pub meta_description: Option<Value>,
    #[serde(default)]
    pub canonical: Option<Value>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub headings: Option<HeadingsInput>,
    #[serde(default, alias = "structuredData")]
    pub schema_markup: Option<Value>,
    #[serde(default)]
    pub open_graph: Option<Value>,
    #[serde(default)]
    pub twitter_card: Option<Value>,
}

/// Meta-tag shape classification, done once per payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetaShape<'a> {
    Nested(&'a NestedMetaTags),
    Flat {
        title: Option<&'a Value>,
        description: Option<&'a Value>,
    },
    Missing,
}

impl SeoInput {
    pub fn meta_shape(&self) -> MetaShape<'_> {
        if let Some(nested) = &self.meta_tags {
            return MetaShape::Nested(nested);
        }
        let title = self.title.as_ref().filter(|v| !v.is_null());
        let description = self.meta_description.as_ref().filter(|v| !v.is_null());
        if title.is_none() && description.is_none() {
            MetaShape::Missing
        } else {
            MetaShape::Flat { title, description }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageScanPayload {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub seo: Option<SeoInput>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub content: Option<ContentStats>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub technology: Option<TechnologyStack>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub security: Option<SecurityPosture>,
    #[serde(default)]
    pub robots_txt: Option<Value>,
    #[serde(default)]
    pub sitemap: Option<Value>,
}
