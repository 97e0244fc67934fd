// src/services/fetch_service/mod.rs

pub mod browser;
pub mod lighthouse;
pub mod page_scan;
pub mod pagespeed;

pub use browser::BrowserSession;
pub use lighthouse::LighthouseRunner;
pub use page_scan::PageScanClient;
pub use pagespeed::{lab_vitals, lighthouse_result, parse_strategy, PageSpeedClient};

use crate::config::AppConfig;
use crate::error::AnalysisError;
use crate::models::lighthouse::{LighthouseInput, LighthouseReport};
use crate::models::record::{
    EssentialSource, Normalization, NormalizedSiteRecord, PageSpeed, PageSpeedStrategy,
};
use crate::models::sources::{PageScanPayload, RawSources, Settled};
use crate::services::normalize_service::normalize;
use crate::utils::{audit_log, audit_warn, normalize_domain};
use anyhow::{bail, Context, Result};
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;

/// PageSpeed vitals plus the Lighthouse report they were measured with,
/// when the fetcher produced one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceAudit {
    pub pagespeed: PageSpeed,
    pub report: Option<LighthouseReport>,
}

/// Fetches the essential sources when no cache supplied them.
pub trait SourceFetcher: Send + Sync {
    fn fetch_page_scan<'a>(&'a self, domain: &'a str) -> BoxFuture<'a, Result<PageScanPayload>>;

    fn fetch_pagespeed<'a>(&'a self, domain: &'a str) -> BoxFuture<'a, Result<PerformanceAudit>>;
}

/// Production fetcher: PageSpeed Insights when a key is configured, the
/// local Lighthouse CLI otherwise, and the page-scan service when set.
pub struct ServiceFetcher {
    pagespeed: Option<PageSpeedClient>,
    lighthouse: LighthouseRunner,
    page_scan: Option<PageScanClient>,
}

impl ServiceFetcher {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .context("failed to build HTTP client")?;
        let session = BrowserSession::new(config.browser_permits, config.browser_delay);
        Ok(ServiceFetcher {
            pagespeed: config.pagespeed_api_key.as_ref().map(|key| {
                PageSpeedClient::new(http.clone(), config.pagespeed_endpoint.clone(), key.clone())
            }),
            lighthouse: LighthouseRunner::new(
                config.lighthouse_bin.clone(),
                session.clone(),
                config.http_timeout,
            ),
            page_scan: config
                .page_scan_url
                .as_ref()
                .map(|url| PageScanClient::new(http.clone(), url.clone(), session.clone())),
        })
    }
}

impl SourceFetcher for ServiceFetcher {
    fn fetch_page_scan<'a>(&'a self, domain: &'a str) -> BoxFuture<'a, Result<PageScanPayload>> {
        async move {
            match &self.page_scan {
                Some(client) => client.scan(domain).await,
                None => bail!("no page scan service configured"),
            }
        }
        .boxed()
    }

    fn fetch_pagespeed<'a>(&'a self, domain: &'a str) -> BoxFuture<'a, Result<PerformanceAudit>> {
        async move {
            if let Some(client) = &self.pagespeed {
                return client.fetch(domain).await;
            }
            let report = self.lighthouse.run(domain).await?;
            Ok(PerformanceAudit {
                pagespeed: PageSpeed {
                    mobile: Some(PageSpeedStrategy {
                        field_data: None,
                        lab_data: Some(lab_vitals(&report)),
                    }),
                    desktop: None,
                },
                report: Some(report),
            })
        }
        .boxed()
    }
}

enum Fetched {
    PageScan(Settled<PageScanPayload>),
    PageSpeed(Settled<PerformanceAudit>),
}

async fn fetch_one(fetcher: &dyn SourceFetcher, domain: &str, source: EssentialSource) -> Fetched {
    let settle = |e: anyhow::Error| format!("{:#}", e);
    match source {
        EssentialSource::PageScan => {
            Fetched::PageScan(fetcher.fetch_page_scan(domain).await.map_err(settle).into())
        }
        EssentialSource::PageSpeed => {
            Fetched::PageSpeed(fetcher.fetch_pagespeed(domain).await.map_err(settle).into())
        }
    }
}

/// Normalize, then fetch any missing essential source exactly once.
///
/// Fetches run concurrently and settle independently. A Lighthouse report
/// that comes back with the performance fetch also fills the lighthouse
/// source when the caller had none. A site that still has no data
/// afterwards is an error.
pub async fn resolve_record(
    raw: &RawSources,
    fetcher: &dyn SourceFetcher,
) -> Result<NormalizedSiteRecord, AnalysisError> {
    let domain = normalize_domain(&raw.domain);
    if domain.is_empty() {
        return Err(AnalysisError::MissingDomain);
    }

    let first = normalize(raw);
    let has_lighthouse = first.record().is_some_and(|r| r.lighthouse().is_some());
    let missing = match first {
        Normalization::Ready(record) => {
            let missing = record.missing_essentials();
            if missing.is_empty() {
                return Ok(record);
            }
            missing
        }
        Normalization::FetchFresh { missing, .. } => missing,
    };

    let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
    audit_log(&domain, &format!("fetching {}", names.join(", ")));
    let outcomes = join_all(
        missing
            .iter()
            .map(|source| fetch_one(fetcher, &domain, *source)),
    )
    .await;

    let mut enriched = raw.clone();
    for outcome in outcomes {
        match outcome {
            Fetched::PageScan(settled) => {
                if let Some(reason) = settled.reason() {
                    audit_warn(&domain, &format!("page scan fetch failed: {}", reason));
                }
                enriched.page_scan = Some(settled);
            }
            Fetched::PageSpeed(settled) => {
                if let Some(reason) = settled.reason() {
                    audit_warn(&domain, &format!("pagespeed fetch failed: {}", reason));
                }
                let report = settled.value().and_then(|audit| audit.report.clone());
                if let (false, Some(report)) = (has_lighthouse, report) {
                    audit_log(&domain, "lighthouse filled from fetched report");
                    enriched.lighthouse = Some(Settled::fulfilled(LighthouseInput::Report(report)));
                }
                enriched.pagespeed = Some(settled.map(|audit| audit.pagespeed));
            }
        }
    }

    normalize(&enriched)
        .into_record()
        .ok_or(AnalysisError::NoData { domain })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubFetcher {
        fail: bool,
        calls: AtomicUsize,
    }

    impl SourceFetcher for StubFetcher {
        fn fetch_page_scan<'a>(&'a self, _domain: &'a str) -> BoxFuture<'a, Result<PageScanPayload>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = if self.fail {
                Err(anyhow!("browser crashed"))
            } else {
                Ok(serde_json::from_value(json!({"content": {"wordCount": 640}})).unwrap())
            };
            async move { result }.boxed()
        }

        fn fetch_pagespeed<'a>(&'a self, _domain: &'a str) -> BoxFuture<'a, Result<PerformanceAudit>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = if self.fail {
                Err(anyhow!("quota exceeded"))
            } else {
                Ok(PerformanceAudit {
                    pagespeed: serde_json::from_value(json!({
                        "mobile": {"labData": {"lcp": 2100, "performanceScore": 0.83}}
                    }))
                    .unwrap(),
                    report: Some(
                        serde_json::from_value(json!({
                            "categories": {
                                "performance": {"score": 0.83},
                                "accessibility": {"score": 0.95},
                                "seo": {"score": 0.92}
                            },
                            "audits": {"largest-contentful-paint": {"score": 0.8, "numericValue": 2100}}
                        }))
                        .unwrap(),
                    ),
                })
            };
            async move { result }.boxed()
        }
    }

    #[tokio::test]
    async fn missing_essentials_are_fetched_once() {
        let fetcher = StubFetcher::default();
        let raw: RawSources = serde_json::from_value(json!({
            "domain": "www.example.com",
            "backlinks": {"status": "fulfilled", "value": {"totalBacklinks": 12}}
        }))
        .unwrap();
        let record = resolve_record(&raw, &fetcher).await.unwrap();
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
        assert_eq!(record.page_scan().unwrap().word_count(), Some(640.0));
        assert_eq!(record.pagespeed().unwrap().mobile_vitals().unwrap().performance_score, Some(83.0));
        assert!(record.missing_essentials().is_empty());
    }

    #[tokio::test]
    async fn fetched_report_fills_missing_lighthouse_categories() {
        let fetcher = StubFetcher::default();
        let raw: RawSources = serde_json::from_value(json!({
            "domain": "example.com",
            "puppeteer": {"status": "fulfilled", "value": {"content": {"wordCount": 300}}}
        }))
        .unwrap();
        let record = resolve_record(&raw, &fetcher).await.unwrap();
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);

        let lighthouse = record.lighthouse().unwrap();
        assert_eq!(lighthouse.performance(), Some(83.0));
        assert_eq!(lighthouse.category_scores.seo.map(|s| s.display_value), Some(92));
        assert!(record.pagespeed().is_some());
    }

    #[tokio::test]
    async fn supplied_lighthouse_is_not_replaced_by_fetched_report() {
        let fetcher = StubFetcher::default();
        let raw: RawSources = serde_json::from_value(json!({
            "domain": "example.com",
            "lighthouse": {"status": "fulfilled", "value": {
                "categoryScores": {"performance": 40, "seo": 60}
            }}
        }))
        .unwrap();
        let record = resolve_record(&raw, &fetcher).await.unwrap();
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
        assert_eq!(record.lighthouse().unwrap().performance(), Some(40.0));
    }

    #[tokio::test]
    async fn complete_caches_skip_fetching() {
        let fetcher = StubFetcher::default();
        let raw: RawSources = serde_json::from_value(json!({
            "domain": "example.com",
            "puppeteer": {"status": "fulfilled", "value": {"content": {"wordCount": 100}}},
            "pagespeed": {"status": "fulfilled", "value": {"mobile": {"fieldData": {"lcp": 1800}}}}
        }))
        .unwrap();
        resolve_record(&raw, &fetcher).await.unwrap();
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_fallback_with_no_data_is_an_error() {
        let fetcher = StubFetcher {
            fail: true,
            ..Default::default()
        };
        let err = resolve_record(&RawSources::new("example.com"), &fetcher)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NoData { ref domain } if domain == "example.com"));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fallback_keeps_partial_record() {
        let fetcher = StubFetcher {
            fail: true,
            ..Default::default()
        };
        let raw: RawSources = serde_json::from_value(json!({
            "domain": "example.com",
            "backlinks": {"status": "fulfilled", "value": {"totalBacklinks": 12}}
        }))
        .unwrap();
        let record = resolve_record(&raw, &fetcher).await.unwrap();
        let wire = serde_json::to_value(&record).unwrap();
        assert_eq!(wire["pagespeed"], json!({"success": false, "error": "quota exceeded"}));
    }

    #[tokio::test]
    async fn blank_domain_is_rejected() {
        let fetcher = StubFetcher::default();
        let err = resolve_record(&RawSources::new("  "), &fetcher).await.unwrap_err();
        assert!(matches!(err, AnalysisError::MissingDomain));
    }
}
