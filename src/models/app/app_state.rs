use crate::config::AppConfig;
use crate::services::fetch_service::SourceFetcher;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub fetcher: Arc<dyn SourceFetcher>,
}

impl AppState {
    pub fn new(config: AppConfig, fetcher: Arc<dyn SourceFetcher>) -> Self {
        AppState { config, fetcher }
    }
}
