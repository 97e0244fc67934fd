use anyhow::{Context, Result};
use log::debug;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Shared gate for browser-backed fetchers (Lighthouse CLI, page scans).
///
/// At most `permits` calls run at once and each caller keeps its permit for
/// `delay` after finishing, which spaces out back-to-back browser launches.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    permits: Arc<Semaphore>,
    delay: Duration,
}

impl BrowserSession {
    pub fn new(permits: usize, delay: Duration) -> Self {
        BrowserSession {
            permits: Arc::new(Semaphore::new(permits.max(1))),
            delay,
        }
    }

    pub async fn run<F, T>(&self, task: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let _permit = self
            .permits
            .acquire()
            .await
            .context("browser session closed")?;
        let result = task.await;
        if !self.delay.is_zero() {
            debug!("Holding browser session for {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }
        result
    }
}
