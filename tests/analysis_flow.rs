use anyhow::{anyhow, Result};
use axum::extract::{Json, State};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::json;
use sitepulse::api::handler::{compare_handler, normalize_handler, score_handler};
use sitepulse::models::api::{ParamsCompare, ParamsScore};
use sitepulse::models::comparison::{Dimension, Winner};
use sitepulse::models::recommendation::Priority;
use sitepulse::models::score::{ScoreCategory, ScoreMode};
use sitepulse::models::sources::{PageScanPayload, RawSources};
use sitepulse::models::AppState;
use sitepulse::services::fetch_service::{PerformanceAudit, SourceFetcher};
use sitepulse::{compare_sites, normalize, score_health, AnalysisError, AppConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fetcher whose providers are always down.
#[derive(Default)]
struct OfflineFetcher {
    calls: AtomicUsize,
}

impl SourceFetcher for OfflineFetcher {
    fn fetch_page_scan<'a>(&'a self, _domain: &'a str) -> BoxFuture<'a, Result<PageScanPayload>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async { Err(anyhow!("browser unavailable")) }.boxed()
    }

    fn fetch_pagespeed<'a>(&'a self, _domain: &'a str) -> BoxFuture<'a, Result<PerformanceAudit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async { Err(anyhow!("quota exceeded")) }.boxed()
    }
}

fn state(fetcher: Arc<OfflineFetcher>) -> State<Arc<AppState>> {
    State(Arc::new(AppState::new(AppConfig::default(), fetcher)))
}

fn sources(value: serde_json::Value) -> RawSources {
    serde_json::from_value(value).expect("raw sources")
}

fn scanned_site(domain: &str, seo: serde_json::Value) -> RawSources {
    sources(json!({
        "domain": domain,
        "puppeteer": {"status": "fulfilled", "value": {"seo": seo}},
        "pagespeed": {"status": "fulfilled", "value": {"mobile": {"fieldData": {"lcp": 2000}}}}
    }))
}

#[tokio::test]
async fn slow_site_gets_scored_and_advised() {
    let fetcher = Arc::new(OfflineFetcher::default());
    let params = ParamsScore {
        sources: sources(json!({
            "domain": "https://www.slow-shop.com/",
            "lighthouse": {"status": "fulfilled", "value": {
                "categories": {"performance": {"score": 0.55}}
            }}
        })),
        mode: None,
    };

    let Json(response) = score_handler(state(fetcher.clone()), Json(params))
        .await
        .expect("score response");
    let body = response.body;

    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    assert_eq!(body.record.domain, "slow-shop.com");
    assert_eq!(body.score.mode, ScoreMode::Enhanced);
    assert_eq!(body.score.category(ScoreCategory::Technical), Some(55));
    assert_eq!(body.score.overall, Some(14));

    let recommendations = &body.recommendations;
    assert!(!recommendations.is_empty() && recommendations.len() <= 5);
    assert_eq!(recommendations[0].priority, Priority::High);
    assert!(recommendations
        .windows(2)
        .all(|pair| pair[0].priority.weight() >= pair[1].priority.weight()));
}

#[tokio::test]
async fn on_page_rubric_decides_the_seo_dimension() {
    let fetcher = Arc::new(OfflineFetcher::default());
    let yours = scanned_site(
        "acme.com",
        json!({
            "title": "Acme Widgets | Handmade widgets since 1999 UK",
            "canonical": "https://acme.com/",
            "openGraph": {"og:title": "Acme Widgets"},
            "schemaMarkup": [{"@type": "Organization"}]
        }),
    );
    let competitor = scanned_site("rival.com", json!({"title": "Rival"}));

    let Json(response) = compare_handler(
        state(fetcher.clone()),
        Json(ParamsCompare { yours, competitor }),
    )
    .await
    .expect("compare response");
    let comparison = response.body.comparison;

    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    let seo = comparison.dimension(Dimension::Seo).expect("seo dimension");
    let wire = serde_json::to_value(seo).unwrap();
    assert_eq!(wire["yours"]["score"], json!(55));
    assert_eq!(wire["competitor"]["score"], json!(10));
    assert_eq!(seo.winner, Winner::Yours);
    assert_eq!(seo.difference, Some(45.0));
    assert!(comparison.dimension(Dimension::Traffic).is_none());
}

#[tokio::test]
async fn two_empty_sites_have_nothing_to_compare() {
    let fetcher = Arc::new(OfflineFetcher::default());
    let params = ParamsCompare {
        yours: RawSources::new("a.com"),
        competitor: RawSources::new("b.com"),
    };
    let err = compare_handler(state(fetcher.clone()), Json(params))
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::NothingToCompare));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn normalize_endpoint_never_fetches() {
    let err = normalize_handler(Json(RawSources::new("example.com")))
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::EmptySources { ref domain } if domain == "example.com"));

    let err = normalize_handler(Json(RawSources::new(""))).await.unwrap_err();
    assert!(matches!(err, AnalysisError::MissingDomain));

    let Json(response) = normalize_handler(Json(sources(json!({
        "domain": "example.com",
        "backlinks": {"status": "fulfilled", "value": {"totalBacklinks": 90}}
    }))))
    .await
    .expect("normalized record");
    assert_eq!(response.body.record.backlinks().unwrap().total_backlinks, Some(90.0));
}

#[test]
fn repeated_analysis_is_stable() {
    let yours = sources(json!({
        "domain": "yours.com",
        "lighthouse": {"status": "fulfilled", "value": {"categories": {"performance": {"score": 0.9}}}},
        "backlinks": {"status": "fulfilled", "value": {"totalBacklinks": 50}}
    }));
    let competitor = sources(json!({
        "domain": "rival.com",
        "lighthouse": {"status": "fulfilled", "value": {"categories": {"performance": {"score": 0.7}}}},
        "backlinks": {"status": "fulfilled", "value": {"totalBacklinks": 200}}
    }));

    let ours = normalize(&yours).into_record().unwrap();
    let theirs = normalize(&competitor).into_record().unwrap();
    assert_eq!(ours, normalize(&yours).into_record().unwrap());
    assert_eq!(
        score_health(&ours, ScoreMode::Enhanced),
        score_health(&ours, ScoreMode::Enhanced)
    );

    let forward = compare_sites(&ours, &theirs);
    assert_eq!(forward, compare_sites(&ours, &theirs));

    let backward = compare_sites(&theirs, &ours);
    for dimension in [Dimension::Performance, Dimension::Backlinks] {
        let there = forward.dimension(dimension).unwrap();
        let back = backward.dimension(dimension).unwrap();
        assert_eq!(there.winner, back.winner.flipped());
        assert_eq!(there.difference.map(|d| -d), back.difference);
    }
}
