pub mod log_utils;
pub mod score_utils;
pub mod serde_utils;
pub mod url_utils;

pub use log_utils::{audit_log, audit_warn};
pub use url_utils::{normalize_domain, site_url};
