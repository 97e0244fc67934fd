use anyhow::{Context, Result};
use log::info;
use sitepulse::api::router;
use sitepulse::config::{AppConfig, LogFormat, LoggingConfig};
use sitepulse::models::AppState;
use sitepulse::services::ServiceFetcher;
use std::sync::Arc;

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt().with_max_level(logging.level.level_filter());
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.logging);

    let fetcher = ServiceFetcher::from_config(&config)?;
    if config.pagespeed_api_key.is_none() {
        info!("No PageSpeed API key set, falling back to {}", config.lighthouse_bin);
    }
    let shared_state = Arc::new(AppState::new(config.clone(), Arc::new(fetcher)));
    let app = router(shared_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}
