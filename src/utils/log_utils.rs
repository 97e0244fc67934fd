use log::{info, warn};

/// Per-domain analysis trail, written as `domain::text` lines.
pub fn audit_log(domain: &str, text: &str) {
    info!(target: "sitepulse::audit", "{}::{}", domain, text);
}

/// Same trail for degraded inputs (rejected sources, malformed payloads).
pub fn audit_warn(domain: &str, text: &str) {
    warn!(target: "sitepulse::audit", "{}::{}", domain, text);
}
