use crate::models::lighthouse::{LighthouseInput, LighthouseReport};
use crate::models::record::{PageSpeed, PageSpeedStrategy, Vitals};
use crate::services::fetch_service::PerformanceAudit;
use crate::services::normalize_service::normalize_lighthouse;
use crate::utils::serde_utils::number_of;
use crate::utils::{audit_log, audit_warn, site_url};
use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde_json::Value;

// CrUX metric name -> vital field. CLS percentiles arrive multiplied by 100.
const FIELD_METRICS: [(&str, &str, f64); 5] = [
    ("LARGEST_CONTENTFUL_PAINT_MS", "lcp", 1.0),
    ("FIRST_INPUT_DELAY_MS", "fid", 1.0),
    ("INTERACTION_TO_NEXT_PAINT", "inp", 1.0),
    ("CUMULATIVE_LAYOUT_SHIFT_SCORE", "cls", 100.0),
    ("FIRST_CONTENTFUL_PAINT_MS", "fcp", 1.0),
];

/// PageSpeed Insights v5 client.
#[derive(Debug, Clone)]
pub struct PageSpeedClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl PageSpeedClient {
    pub fn new(http: Client, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        PageSpeedClient {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Mobile is required; desktop is best-effort. The mobile Lighthouse
    /// result is kept alongside the vitals.
    pub async fn fetch(&self, domain: &str) -> Result<PerformanceAudit> {
        let mobile_body = self.run_strategy(domain, "mobile").await?;
        let desktop = match self.run_strategy(domain, "desktop").await {
            Ok(body) => Some(parse_strategy(&body)),
            Err(e) => {
                audit_warn(domain, &format!("desktop PageSpeed run failed: {:#}", e));
                None
            }
        };
        audit_log(domain, "PageSpeed Insights data fetched");
        Ok(PerformanceAudit {
            pagespeed: PageSpeed {
                mobile: Some(parse_strategy(&mobile_body)),
                desktop,
            },
            report: lighthouse_result(&mobile_body),
        })
    }

    async fn run_strategy(&self, domain: &str, strategy: &str) -> Result<Value> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("url", site_url(domain).as_str()),
                ("strategy", strategy),
                ("category", "performance"),
                ("category", "accessibility"),
                ("category", "best-practices"),
                ("category", "seo"),
                ("key", self.api_key.as_str()),
            ],
        )
        .context("invalid PageSpeed endpoint")?;
        let body: Value = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("PageSpeed request failed for {}", domain))?
            .error_for_status()
            .with_context(|| format!("PageSpeed returned an error for {}", domain))?
            .json()
            .await
            .context("PageSpeed response was not JSON")?;
        Ok(body)
    }
}

/// Field data from `loadingExperience`, lab data from `lighthouseResult`.
pub fn parse_strategy(body: &Value) -> PageSpeedStrategy {
    let field = field_vitals(body.pointer("/loadingExperience/metrics"));
    let lab = lighthouse_result(body).map(|report| lab_vitals(&report));
    PageSpeedStrategy {
        field_data: field.filter(|v| !v.is_empty()),
        lab_data: lab.filter(|v| !v.is_empty()),
    }
}

pub fn lighthouse_result(body: &Value) -> Option<LighthouseReport> {
    body.get("lighthouseResult")
        .cloned()
        .and_then(|report| serde_json::from_value(report).ok())
}

fn field_vitals(metrics: Option<&Value>) -> Option<Vitals> {
    let metrics = metrics?.as_object()?;
    let mut vitals = Vitals::default();
    for (metric, key, divisor) in FIELD_METRICS {
        let Some(value) = metrics
            .get(metric)
            .and_then(|m| m.get("percentile"))
            .and_then(number_of)
        else {
            continue;
        };
        let value = Some(value / divisor);
        match key {
            "lcp" => vitals.lcp = value,
            "fid" => vitals.fid = value,
            "inp" => vitals.inp = value,
            "cls" => vitals.cls = value,
            _ => vitals.fcp = value,
        }
    }
    Some(vitals)
}

/// Lab vitals and the 0-100 performance score of a Lighthouse report.
pub fn lab_vitals(report: &LighthouseReport) -> Vitals {
    let summary = normalize_lighthouse(&LighthouseInput::Report(report.clone()));
    Vitals {
        lcp: summary.vital("lcp"),
        fid: summary.vital("fid"),
        inp: summary.vital("inp"),
        cls: summary.vital("cls"),
        fcp: summary.vital("fcp"),
        performance_score: summary.performance(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insights_response_splits_field_and_lab() {
        let body = json!({
            "loadingExperience": {"metrics": {
                "LARGEST_CONTENTFUL_PAINT_MS": {"percentile": 2300, "category": "FAST"},
                "INTERACTION_TO_NEXT_PAINT": {"percentile": 180},
                "CUMULATIVE_LAYOUT_SHIFT_SCORE": {"percentile": 12}
            }},
            "lighthouseResult": {
                "requestedUrl": "https://example.com",
                "categories": {"performance": {"score": 0.71}},
                "audits": {
                    "largest-contentful-paint": {"score": 0.5, "numericValue": 3400.5},
                    "cumulative-layout-shift": {"score": 0.9, "numericValue": 0.04}
                }
            }
        });
        let strategy = parse_strategy(&body);
        let field = strategy.field_data.unwrap();
        assert_eq!(field.lcp, Some(2300.0));
        assert_eq!(field.inp, Some(180.0));
        assert_eq!(field.cls, Some(0.12));
        let lab = strategy.lab_data.unwrap();
        assert_eq!(lab.performance_score, Some(71.0));
        assert_eq!(lab.lcp, Some(3400.5));

        let report = lighthouse_result(&body).unwrap();
        assert_eq!(report.requested_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn response_without_data_is_empty() {
        let strategy = parse_strategy(&json!({"id": "https://example.com"}));
        assert_eq!(strategy, PageSpeedStrategy::default());
    }
}
