// src/models/record/mod.rs

pub mod content;
pub mod lighthouse;
pub mod page_scan;
pub mod pagespeed;
pub mod social;
pub mod technical_seo;
pub mod traffic;

pub use content::{ContentActivity, ContentUpdates, ContentVelocity, RssFeed, SitemapActivity};
pub use lighthouse::{CategoryScores, LighthouseSummary, ScorePair, VitalMetric};
pub use page_scan::{
    ContentStats, HeadingCounts, ImageStats, LinkStats, MetaTags, PageScan, SecurityPosture,
    SeoSnapshot, TechnologyStack,
};
pub use pagespeed::{PageSpeed, PageSpeedStrategy, Vitals};
pub use social::{Backlinks, Engagement, EngagementSummary, PostingPattern, SocialMetrics, SocialProfile};
pub use technical_seo::{
    MetaTagCheck, RobotsTxtCheck, SitemapCheck, SslCheck, StructuredDataCheck, TechnicalSeo,
};
pub use traffic::{SearchConsoleSummary, TrafficMetrics, TrafficSource, TrafficSummary};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker left at a field whose provider failed: `{"success":false,"error":..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFailure {
    pub success: bool,
    pub error: String,
}

impl SourceFailure {
    pub fn new(error: impl Into<String>) -> Self {
        SourceFailure {
            success: false,
            error: error.into(),
        }
    }
}

/// A provider slot in the normalized record: data, or the failure marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sourced<T> {
    Failed(SourceFailure),
    Available(T),
}

impl<T> Sourced<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Sourced::Available(data) => Some(data),
            Sourced::Failed(_) => None,
        }
    }
}

fn available<T>(slot: &Option<Sourced<T>>) -> Option<&T> {
    slot.as_ref().and_then(Sourced::data)
}

/// Sources the boundary fetches itself when no cache supplied them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EssentialSource {
    PageScan,
    PageSpeed,
}

impl EssentialSource {
    pub const ALL: [EssentialSource; 2] = [EssentialSource::PageScan, EssentialSource::PageSpeed];
}

impl fmt::Display for EssentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EssentialSource::PageScan => "page scan",
            EssentialSource::PageSpeed => "pagespeed",
        };
        write!(f, "{}", name)
    }
}

/// Canonical per-domain record. Failed, null and absent providers all read
/// as "unavailable" through the accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSiteRecord {
    pub domain: String,
    pub lighthouse: Option<Sourced<LighthouseSummary>>,
    pub pagespeed: Option<Sourced<PageSpeed>>,
    #[serde(rename = "technicalSEO")]
    pub technical_seo: Option<Sourced<TechnicalSeo>>,
    #[serde(rename = "puppeteer")]
    pub page_scan: Option<Sourced<PageScan>>,
    pub search_console: Option<Sourced<SearchConsoleSummary>>,
    pub traffic: Option<Sourced<TrafficSummary>>,
    pub content_updates: Option<Sourced<ContentUpdates>>,
    pub backlinks: Option<Sourced<Backlinks>>,
    pub instagram: Option<Sourced<SocialMetrics>>,
    pub facebook: Option<Sourced<SocialMetrics>>,
    pub seo: Option<SeoSnapshot>,
}

impl NormalizedSiteRecord {
    pub fn empty(domain: impl Into<String>) -> Self {
        NormalizedSiteRecord {
            domain: domain.into(),
            ..Default::default()
        }
    }

    pub fn lighthouse(&self) -> Option<&LighthouseSummary> {
        available(&self.lighthouse)
    }

    pub fn pagespeed(&self) -> Option<&PageSpeed> {
        available(&self.pagespeed)
    }

    pub fn technical_seo(&self) -> Option<&TechnicalSeo> {
        available(&self.technical_seo)
    }

    pub fn page_scan(&self) -> Option<&PageScan> {
        available(&self.page_scan)
    }

    pub fn search_console(&self) -> Option<&SearchConsoleSummary> {
        available(&self.search_console)
    }

    pub fn traffic(&self) -> Option<&TrafficSummary> {
        available(&self.traffic)
    }

    pub fn content_updates(&self) -> Option<&ContentUpdates> {
        available(&self.content_updates)
    }

    pub fn backlinks(&self) -> Option<&Backlinks> {
        available(&self.backlinks)
    }

    pub fn instagram(&self) -> Option<&SocialMetrics> {
        available(&self.instagram)
    }

    pub fn facebook(&self) -> Option<&SocialMetrics> {
        available(&self.facebook)
    }

    pub fn has_any_data(&self) -> bool {
        self.lighthouse().is_some()
            || self.pagespeed().is_some()
            || self.technical_seo().is_some()
            || self.page_scan().is_some()
            || self.search_console().is_some()
            || self.traffic().is_some()
            || self.content_updates().is_some()
            || self.backlinks().is_some()
            || self.instagram().is_some()
            || self.facebook().is_some()
    }

    /// Essential sources no supplied cache provided.
    pub fn missing_essentials(&self) -> Vec<EssentialSource> {
        EssentialSource::ALL
            .into_iter()
            .filter(|source| match source {
                EssentialSource::PageScan => self.page_scan().is_none(),
                EssentialSource::PageSpeed => self.pagespeed().is_none(),
            })
            .collect()
    }
}

/// Result of normalizing one site's raw sources.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalization {
    Ready(NormalizedSiteRecord),
    /// No provider yielded anything; the caller should fetch fresh data.
    FetchFresh {
        domain: String,
        missing: Vec<EssentialSource>,
    },
}

impl Normalization {
    pub fn record(&self) -> Option<&NormalizedSiteRecord> {
        match self {
            Normalization::Ready(record) => Some(record),
            Normalization::FetchFresh { .. } => None,
        }
    }

    pub fn into_record(self) -> Option<NormalizedSiteRecord> {
        match self {
            Normalization::Ready(record) => Some(record),
            Normalization::FetchFresh { .. } => None,
        }
    }
}
