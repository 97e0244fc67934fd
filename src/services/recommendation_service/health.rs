use crate::models::record::NormalizedSiteRecord;
use crate::models::recommendation::{Priority, Recommendation, RecommendationCategory as Category};
use crate::models::score::{ScoreCategory, ScoreResult};

const THIN_CONTENT_WORDS: f64 = 300.0;

fn below(scores: &ScoreResult, category: ScoreCategory, threshold: u32) -> bool {
    scores.category(category).is_some_and(|value| value < threshold)
}

/// Candidate findings for one site, in a fixed order.
pub fn health_candidates(record: &NormalizedSiteRecord, scores: &ScoreResult) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if scores.overall.is_none() {
        out.push(Recommendation::new(
            Category::DataSources,
            Priority::High,
            "Connect more data sources",
            "No score category could be computed. Connect Lighthouse, analytics or Search Console data to get a health score.",
            "Enables scoring",
        ));
    }

    let performance = record.lighthouse().and_then(|l| l.performance());
    if below(scores, ScoreCategory::Technical, 70) && performance.is_some_and(|p| p < 70.0) {
        out.push(Recommendation::new(
            Category::Performance,
            Priority::High,
            "Improve Core Web Vitals",
            "Performance and Core Web Vitals are below recommended levels. Optimize images, defer unused JavaScript and reduce server response time.",
            "Faster pages improve rankings and conversions",
        ));
    }
    if let Some(lighthouse) = record.lighthouse() {
        if !lighthouse.opportunities.is_empty() && performance.is_some_and(|p| p < 90.0) {
            let top: Vec<&str> = lighthouse.opportunities.iter().take(3).map(String::as_str).collect();
            out.push(Recommendation::new(
                Category::Performance,
                Priority::Medium,
                "Address Lighthouse opportunities",
                format!("Start with: {}", top.join(", ")),
                "Lower load times",
            ));
        }
    }

    if let Some(page_scan) = record.page_scan() {
        if page_scan.security.as_ref().and_then(|s| s.is_https) == Some(false) {
            out.push(Recommendation::new(
                Category::Security,
                Priority::High,
                "Serve the site over HTTPS",
                "The page was served without TLS. Install a certificate and redirect all HTTP traffic.",
                "Browsers flag insecure pages and search engines rank them lower",
            ));
        }
    }

    if below(scores, ScoreCategory::TechnicalSeo, 70) {
        let mut issues = Vec::new();
        if let Some(checks) = record.technical_seo() {
            if checks.has_robots_txt() == Some(false) {
                issues.push("robots.txt");
            }
            if checks.has_sitemap() == Some(false) {
                issues.push("XML sitemap");
            }
            if checks.has_ssl() == Some(false) {
                issues.push("SSL");
            }
            if checks.has_structured_data() == Some(false) {
                issues.push("structured data");
            }
        }
        let description = if issues.is_empty() {
            "Technical SEO checks scored low. Review crawlability and indexing settings.".to_string()
        } else {
            format!("Missing or failing: {}", issues.join(", "))
        };
        out.push(Recommendation::new(
            Category::TechnicalSeo,
            Priority::High,
            "Fix technical SEO issues",
            description,
            "Search engines can crawl and index the site reliably",
        ));
    }

    if below(scores, ScoreCategory::SeoHealth, 80) {
        out.push(Recommendation::new(
            Category::Seo,
            Priority::High,
            "Improve on-page SEO",
            "Lighthouse SEO and accessibility audits found issues. Fix crawlable links, alt text and descriptive link text.",
            "Better relevance signals for search engines",
        ));
    }

    if let Some(bounce) = record.traffic().and_then(|t| t.bounce_rate()) {
        if bounce > 55.0 {
            out.push(Recommendation::new(
                Category::UserExperience,
                Priority::High,
                "Reduce bounce rate",
                format!("{:.0}% of visitors leave after one page. Improve above-the-fold content and internal linking.", bounce),
                "More engaged sessions",
            ));
        }
    }
    if below(scores, ScoreCategory::UserExperience, 70) {
        out.push(Recommendation::new(
            Category::UserExperience,
            Priority::Medium,
            "Increase time on site",
            "Sessions are short. Add related content and clear next steps on key pages.",
            "Longer sessions and more conversions",
        ));
    }

    if below(scores, ScoreCategory::SearchVisibility, 60) {
        out.push(Recommendation::new(
            Category::SearchVisibility,
            Priority::Medium,
            "Improve search visibility",
            "Click-through rate or average position is weak. Rewrite titles and descriptions for the queries you already rank for.",
            "More organic clicks",
        ));
    }

    if let Some(seo) = record.seo.as_ref() {
        if !seo.meta_tags.has_description {
            out.push(Recommendation::new(
                Category::Seo,
                Priority::Medium,
                "Add a meta description",
                "The page has no meta description. Write a 120-160 character summary.",
                "Higher click-through from search results",
            ));
        }
        if seo.structured_data_count == 0 {
            out.push(Recommendation::new(
                Category::Seo,
                Priority::Low,
                "Add structured data",
                "No schema.org markup was found. Add Organization and WebSite markup at minimum.",
                "Eligibility for rich results",
            ));
        }
    }

    if record
        .page_scan()
        .and_then(|scan| scan.word_count())
        .is_some_and(|words| words < THIN_CONTENT_WORDS)
    {
        out.push(Recommendation::new(
            Category::Content,
            Priority::Medium,
            "Expand thin content",
            "The page has fewer than 300 words. Add substantive copy that answers visitor questions.",
            "Better topical relevance",
        ));
    }

    if record.traffic().is_none() {
        out.push(Recommendation::new(
            Category::DataSources,
            Priority::Low,
            "Connect Google Analytics",
            "Traffic data is missing, so user experience cannot be scored.",
            "More complete health score",
        ));
    }
    if record.search_console().is_none() {
        out.push(Recommendation::new(
            Category::DataSources,
            Priority::Low,
            "Connect Search Console",
            "Search Console data is missing, so search visibility cannot be scored.",
            "More complete health score",
        ));
    }

    out
}
