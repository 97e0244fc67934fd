use crate::models::record::{ContentVelocity, HeadingCounts, MetaTags, TechnologyStack, TrafficSource};
use crate::models::recommendation::Recommendation;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Yours,
    Competitor,
    Tie,
}

impl Winner {
    /// Positive favours yours, negative the competitor, zero is a tie.
    pub fn from_difference(difference: f64) -> Self {
        if difference > 0.0 {
            Winner::Yours
        } else if difference < 0.0 {
            Winner::Competitor
        } else {
            Winner::Tie
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Winner::Yours => Winner::Competitor,
            Winner::Competitor => Winner::Yours,
            Winner::Tie => Winner::Tie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Performance,
    Seo,
    Backlinks,
    Content,
    Traffic,
    ContentUpdates,
    Instagram,
    Facebook,
    Technology,
    Security,
}

impl Dimension {
    /// Name used in user-facing summary and recommendation text.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Performance => "performance",
            Dimension::Seo => "SEO",
            Dimension::Backlinks => "backlinks",
            Dimension::Content => "content",
            Dimension::Traffic => "traffic",
            Dimension::ContentUpdates => "content updates",
            Dimension::Instagram => "Instagram",
            Dimension::Facebook => "Facebook",
            Dimension::Technology => "technology",
            Dimension::Security => "security",
        }
    }
}

/// A value one side may not have; serialized as `"N/A"` when missing so the
/// response shape stays stable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reported<T> {
    Value(T),
    NotAvailable,
}

impl<T> Reported<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Reported::Value(v) => Some(v),
            Reported::NotAvailable => None,
        }
    }
}

impl<T> From<Option<T>> for Reported<T> {
    fn from(value: Option<T>) -> Self {
        value.map(Reported::Value).unwrap_or(Reported::NotAvailable)
    }
}

impl<T: Serialize> Serialize for Reported<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reported::Value(v) => v.serialize(serializer),
            Reported::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSide {
    pub score: u32,
    pub lcp: Option<f64>,
    pub cls: Option<f64>,
    pub opportunities: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSide {
    pub score: u32,
    pub lighthouse_seo: Option<u32>,
    pub meta_tags: MetaTags,
    pub headings: HeadingCounts,
    pub open_graph: bool,
    pub twitter_card: bool,
    pub structured_data_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklinksSide {
    pub total_backlinks: f64,
    pub referring_domains: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSide {
    pub word_count: f64,
    pub paragraph_count: Option<f64>,
    pub images: Option<f64>,
    pub internal_links: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSide {
    pub monthly_visits: Reported<f64>,
    pub avg_visit_duration: Reported<f64>,
    pub pages_per_visit: Reported<f64>,
    pub bounce_rate: Reported<f64>,
    pub source: Reported<TrafficSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentUpdatesSide {
    pub average_posts_per_month: Reported<f64>,
    pub recent_posts: Reported<f64>,
    pub last_content_date: Reported<DateTime<Utc>>,
    pub content_velocity: Reported<ContentVelocity>,
    pub is_active: Reported<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSide {
    pub followers: Option<f64>,
    pub engagement: f64,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySide {
    pub score: u32,
    pub is_https: bool,
    pub has_cdn: bool,
    pub mixed_content: bool,
}

/// Per-dimension side record; both sides of a result share one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SideMetrics {
    Performance(PerformanceSide),
    Seo(SeoSide),
    Backlinks(BacklinksSide),
    Content(ContentSide),
    Traffic(TrafficSide),
    ContentUpdates(ContentUpdatesSide),
    Social(SocialSide),
    Technology(TechnologyStack),
    Security(SecuritySide),
}

/// Secondary numeric comparison inside a dimension (social followers,
/// social engagement).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubComparison {
    pub yours: f64,
    pub competitor: f64,
    pub difference: f64,
    pub winner: Winner,
}

impl SubComparison {
    pub fn new(yours: f64, competitor: f64) -> Self {
        let difference = yours - competitor;
        SubComparison {
            yours,
            competitor,
            difference,
            winner: Winner::from_difference(difference),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub dimension: Dimension,
    pub winner: Winner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,
    /// Whether the gap exceeded the dimension's materiality threshold.
    pub significant: bool,
    pub yours: SideMetrics,
    pub competitor: SideMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<SubComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<SubComparison>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallVerdict {
    pub wins: usize,
    pub losses: usize,
    pub overall_winner: Winner,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteComparison {
    pub yours: String,
    pub competitor: String,
    pub dimensions: Vec<ComparisonResult>,
    pub summary: ComparisonSummary,
    pub verdict: OverallVerdict,
    pub overall_winner: Winner,
}

impl SiteComparison {
    pub fn dimension(&self, dimension: Dimension) -> Option<&ComparisonResult> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }
}
