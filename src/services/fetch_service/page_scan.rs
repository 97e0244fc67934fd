use super::browser::BrowserSession;
use crate::models::sources::PageScanPayload;
use crate::utils::{audit_log, site_url};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::json;

/// Client for the external headless-browser page-scan service.
#[derive(Debug, Clone)]
pub struct PageScanClient {
    http: Client,
    endpoint: String,
    session: BrowserSession,
}

impl PageScanClient {
    pub fn new(http: Client, endpoint: impl Into<String>, session: BrowserSession) -> Self {
        PageScanClient {
            http,
            endpoint: endpoint.into(),
            session,
        }
    }

    pub async fn scan(&self, domain: &str) -> Result<PageScanPayload> {
        self.session
            .run(async {
                let payload: PageScanPayload = self
                    .http
                    .post(&self.endpoint)
                    .json(&json!({ "url": site_url(domain) }))
                    .send()
                    .await
                    .with_context(|| format!("page scan request failed for {}", domain))?
                    .error_for_status()
                    .with_context(|| format!("page scan service rejected {}", domain))?
                    .json()
                    .await
                    .context("page scan response did not match the expected shape")?;
                audit_log(domain, "Page scan completed");
                Ok(payload)
            })
            .await
    }
}
