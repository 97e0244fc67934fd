// src/models/sources/mod.rs

pub mod page_scan;
pub mod settled;

pub use page_scan::{
    HeadingsInput, MetaShape, MetaTagState, NestedMetaTags, PageScanPayload, SeoInput,
};
pub use settled::Settled;

use crate::models::lighthouse::LighthouseInput;
use crate::models::record::{
    Backlinks, ContentUpdates, PageSpeed, SearchConsoleSummary, SocialMetrics, TechnicalSeo,
    TrafficSummary,
};
use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};

/// Legacy cache object that carried Lighthouse data next to Search Console
/// aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConsoleCache {
    #[serde(default)]
    pub lighthouse: Option<Settled<LighthouseInput>>,
    #[serde(default, alias = "aggregates", deserialize_with = "serde_utils::lenient")]
    pub search_console: Option<SearchConsoleSummary>,
}

/// Everything the fan-out fetched for one domain, each provider settled
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSources {
    pub domain: String,
    #[serde(default)]
    pub lighthouse: Option<Settled<LighthouseInput>>,
    #[serde(default)]
    pub search_console_cache: Option<Settled<SearchConsoleCache>>,
    #[serde(default)]
    pub search_console: Option<Settled<SearchConsoleSummary>>,
    #[serde(default)]
    pub pagespeed: Option<Settled<PageSpeed>>,
    #[serde(default, rename = "technicalSEO", alias = "technicalSeo")]
    pub technical_seo: Option<Settled<TechnicalSeo>>,
    #[serde(default, rename = "puppeteer", alias = "pageScan")]
    pub page_scan: Option<Settled<PageScanPayload>>,
    #[serde(default)]
    pub traffic: Option<Settled<TrafficSummary>>,
    #[serde(default)]
    pub content_updates: Option<Settled<ContentUpdates>>,
    #[serde(default)]
    pub backlinks: Option<Settled<Backlinks>>,
    #[serde(default)]
    pub instagram: Option<Settled<SocialMetrics>>,
    #[serde(default)]
    pub facebook: Option<Settled<SocialMetrics>>,
}

impl RawSources {
    pub fn new(domain: impl Into<String>) -> Self {
        RawSources {
            domain: domain.into(),
            ..Default::default()
        }
    }
}
