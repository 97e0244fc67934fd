use super::browser::BrowserSession;
use crate::models::lighthouse::LighthouseReport;
use crate::utils::{audit_log, site_url};
use anyhow::{bail, Context, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Runs the local `lighthouse` CLI and reads its JSON report from stdout.
#[derive(Debug, Clone)]
pub struct LighthouseRunner {
    bin: String,
    session: BrowserSession,
    timeout: Duration,
}

impl LighthouseRunner {
    pub fn new(bin: impl Into<String>, session: BrowserSession, timeout: Duration) -> Self {
        LighthouseRunner {
            bin: bin.into(),
            session,
            timeout,
        }
    }

    pub async fn run(&self, domain: &str) -> Result<LighthouseReport> {
        let full_url = site_url(domain);
        self.session
            .run(async {
                audit_log(domain, "Running Lighthouse");
                let mut command = Command::new(&self.bin);
                command
                    .arg(&full_url)
                    .arg("--output=json")
                    .arg("--output-path=stdout")
                    .arg("--quiet")
                    .arg("--no-enable-error-reporting")
                    .arg("--chrome-flags=--headless --no-sandbox")
                    .arg(format!(
                        "--max-wait-for-load={}",
                        max_wait_for_load(self.timeout).as_millis()
                    ))
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .kill_on_drop(true);

                let output = tokio::time::timeout(self.timeout, command.output())
                    .await
                    .with_context(|| format!("Lighthouse timed out for {}", full_url))?
                    .with_context(|| format!("failed to start {}", self.bin))?;

                if !output.status.success() {
                    bail!(
                        "Lighthouse failed for {}: {}",
                        full_url,
                        String::from_utf8_lossy(&output.stderr)
                    );
                }

                let report: LighthouseReport = serde_json::from_slice(&output.stdout)
                    .with_context(|| format!("unreadable Lighthouse report for {}", full_url))?;
                audit_log(domain, "Lighthouse report captured");
                Ok(report)
            })
            .await
    }
}

/// Page-load wait handed to Lighthouse. A quarter of the process timeout is
/// left for auditing and report output before the run is killed.
pub fn max_wait_for_load(timeout: Duration) -> Duration {
    timeout * 3 / 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_an_error_not_a_panic() {
        let runner = LighthouseRunner::new(
            "/nonexistent/lighthouse-bin",
            BrowserSession::new(1, Duration::ZERO),
            Duration::from_secs(5),
        );
        let err = runner.run("example.com").await.unwrap_err();
        assert!(format!("{:#}", err).contains("failed to start"));
    }

    #[test]
    fn load_wait_stays_inside_the_process_timeout() {
        assert_eq!(max_wait_for_load(Duration::from_secs(60)), Duration::from_secs(45));
        assert!(max_wait_for_load(Duration::from_secs(5)) < Duration::from_secs(5));
    }
}
