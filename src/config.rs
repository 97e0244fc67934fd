// src/config.rs

use crate::models::score::ScoreMode;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

const ENV_PREFIX: &str = "SITEPULSE_";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format: {}", other)),
        }
    }
}

/// Log severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::TRACE,
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warn => LevelFilter::WARN,
            Self::Error => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(anyhow!("unknown log level: {}", other)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: LogLevel::Info,
        }
    }
}

/// Service configuration, read from `SITEPULSE_*` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub default_mode: ScoreMode,
    /// PageSpeed Insights key. Without one the local Lighthouse CLI is used.
    pub pagespeed_api_key: Option<String>,
    pub pagespeed_endpoint: String,
    /// Page-scan (headless browser) service endpoint.
    pub page_scan_url: Option<String>,
    pub lighthouse_bin: String,
    pub browser_permits: usize,
    /// Pause held after each browser-backed call.
    pub browser_delay: Duration,
    pub http_timeout: Duration,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: "0.0.0.0:3043".to_string(),
            default_mode: ScoreMode::Enhanced,
            pagespeed_api_key: None,
            pagespeed_endpoint: "https://www.googleapis.com/pagespeedonline/v5/runPagespeed"
                .to_string(),
            page_scan_url: None,
            lighthouse_bin: "lighthouse".to_string(),
            browser_permits: 1,
            browser_delay: Duration::from_millis(1000),
            http_timeout: Duration::from_secs(60),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, name))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = AppConfig::default();

        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(mode) = get("SCORE_MODE") {
            config.default_mode = mode
                .parse::<ScoreMode>()
                .map_err(|e: String| anyhow!(e))
                .context("SITEPULSE_SCORE_MODE")?;
        }
        config.pagespeed_api_key = get("PAGESPEED_API_KEY");
        if let Some(endpoint) = get("PAGESPEED_ENDPOINT") {
            config.pagespeed_endpoint = endpoint;
        }
        config.page_scan_url = get("PAGE_SCAN_URL");
        if let Some(bin) = get("LIGHTHOUSE_BIN") {
            config.lighthouse_bin = bin;
        }
        if let Some(permits) = get("BROWSER_PERMITS") {
            let permits = permits.parse::<usize>().context("SITEPULSE_BROWSER_PERMITS")?;
            config.browser_permits = permits.max(1);
        }
        if let Some(delay) = get("BROWSER_DELAY_MS") {
            config.browser_delay =
                Duration::from_millis(delay.parse::<u64>().context("SITEPULSE_BROWSER_DELAY_MS")?);
        }
        if let Some(timeout) = get("HTTP_TIMEOUT_SECS") {
            config.http_timeout =
                Duration::from_secs(timeout.parse::<u64>().context("SITEPULSE_HTTP_TIMEOUT_SECS")?);
        }
        if let Some(level) = get("LOG_LEVEL") {
            config.logging.level = level.parse::<LogLevel>().context("SITEPULSE_LOG_LEVEL")?;
        }
        if let Some(format) = get("LOG_FORMAT") {
            config.logging.format = format.parse::<LogFormat>().context("SITEPULSE_LOG_FORMAT")?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:3043");
    }

    #[test]
    fn variables_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SITEPULSE_SCORE_MODE", "basic"),
            ("SITEPULSE_PAGESPEED_API_KEY", "abc123"),
            ("SITEPULSE_BROWSER_PERMITS", "0"),
            ("SITEPULSE_BROWSER_DELAY_MS", "250"),
            ("SITEPULSE_LOG_FORMAT", "json"),
            ("SITEPULSE_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.default_mode, ScoreMode::Basic);
        assert_eq!(config.pagespeed_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.browser_permits, 1);
        assert_eq!(config.browser_delay, Duration::from_millis(250));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn bad_numbers_are_reported() {
        let err = AppConfig::from_lookup(lookup(&[("SITEPULSE_HTTP_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("SITEPULSE_HTTP_TIMEOUT_SECS"));
    }
}
