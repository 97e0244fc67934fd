// src/services/normalize_service/mod.rs

pub mod lighthouse;
pub mod sanitize;
pub mod seo;

pub use lighthouse::{canonical_vital_key, normalize_lighthouse};
pub use seo::{merge_seo, normalize_page_scan, page_seo, reconcile_meta};

use crate::models::record::{
    EssentialSource, Normalization, NormalizedSiteRecord, SourceFailure, Sourced,
};
use crate::models::sources::{RawSources, Settled};
use crate::utils::{audit_log, audit_warn, normalize_domain};

/// Fold every settled provider result into one canonical record.
///
/// Rejected providers and payloads that fail their own sanity checks land as
/// `{success:false, error}` markers. Providers that fulfilled with nothing
/// usable are left absent. When nothing at all came through the caller gets
/// [`Normalization::FetchFresh`] instead of an empty record.
pub fn normalize(raw: &RawSources) -> Normalization {
    let domain = normalize_domain(&raw.domain);
    let mut record = NormalizedSiteRecord::empty(domain.clone());

    let cache = raw.search_console_cache.as_ref().and_then(Settled::value);

    let lighthouse = prefer(
        raw.lighthouse.as_ref(),
        cache.and_then(|c| c.lighthouse.as_ref()),
    );
    record.lighthouse = settle(&domain, "lighthouse", lighthouse, |input| {
        Ok(Some(normalize_lighthouse(input)).filter(|summary| !summary.is_empty()))
    });

    let legacy_console = cache
        .and_then(|c| c.search_console.clone())
        .map(Settled::fulfilled);
    let search_console = prefer(raw.search_console.as_ref(), legacy_console.as_ref());
    record.search_console = settle(&domain, "searchConsole", search_console, |input| {
        Ok(Some(sanitize::search_console(input)).filter(|summary| !summary.is_empty()))
    });

    record.pagespeed = settle(&domain, "pagespeed", raw.pagespeed.as_ref(), |input| {
        Ok(Some(sanitize::pagespeed(input)).filter(|speed| !speed.is_empty()))
    });
    record.technical_seo = settle(&domain, "technicalSEO", raw.technical_seo.as_ref(), |input| {
        Ok(Some(sanitize::technical_seo(input)).filter(|checks| !checks.is_empty()))
    });
    record.page_scan = settle(&domain, "puppeteer", raw.page_scan.as_ref(), |input| {
        Ok(Some(normalize_page_scan(input)).filter(|scan| !scan.is_empty()))
    });
    record.traffic = settle(&domain, "traffic", raw.traffic.as_ref(), |input| {
        let summary = sanitize::traffic(input)?;
        let has_metrics = summary.metrics.as_ref().is_some_and(|m| !m.is_empty());
        Ok(has_metrics.then_some(summary))
    });
    record.content_updates = settle(&domain, "contentUpdates", raw.content_updates.as_ref(), |input| {
        Ok(Some(sanitize::content_updates(input)).filter(|updates| !updates.is_empty()))
    });
    record.backlinks = settle(&domain, "backlinks", raw.backlinks.as_ref(), |input| {
        let backlinks = sanitize::backlinks(input);
        Ok(backlinks.total_backlinks.is_some().then_some(backlinks))
    });
    record.instagram = settle(&domain, "instagram", raw.instagram.as_ref(), |input| {
        Ok(Some(sanitize::social(input)).filter(|social| !social.is_empty()))
    });
    record.facebook = settle(&domain, "facebook", raw.facebook.as_ref(), |input| {
        Ok(Some(sanitize::social(input)).filter(|social| !social.is_empty()))
    });

    record.seo = merge_seo(
        record.page_scan().and_then(|scan| scan.seo.as_ref()),
        record.technical_seo(),
    );

    if !record.has_any_data() {
        audit_warn(&domain, "no provider returned data, fresh fetch required");
        return Normalization::FetchFresh {
            domain,
            missing: EssentialSource::ALL.to_vec(),
        };
    }

    let missing = record.missing_essentials();
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
        audit_log(&domain, &format!("missing essential sources: {}", names.join(", ")));
    }
    Normalization::Ready(record)
}

/// Top-level source when it fulfilled, else the legacy cache copy when that
/// fulfilled, else whichever rejection is available.
fn prefer<'a, T>(
    primary: Option<&'a Settled<T>>,
    legacy: Option<&'a Settled<T>>,
) -> Option<&'a Settled<T>> {
    match (primary, legacy) {
        (Some(primary), _) if primary.value().is_some() => Some(primary),
        (_, Some(legacy)) if legacy.value().is_some() => Some(legacy),
        (primary, legacy) => primary.or(legacy),
    }
}

fn settle<T, U, F>(
    domain: &str,
    name: &str,
    source: Option<&Settled<T>>,
    convert: F,
) -> Option<Sourced<U>>
where
    F: FnOnce(&T) -> Result<Option<U>, String>,
{
    match source? {
        Settled::Rejected(reason) => {
            audit_warn(domain, &format!("{} rejected: {}", name, reason));
            Some(Sourced::Failed(SourceFailure::new(reason.clone())))
        }
        Settled::Fulfilled(value) => match convert(value) {
            Ok(Some(normalized)) => Some(Sourced::Available(normalized)),
            Ok(None) => {
                audit_log(domain, &format!("{} returned no usable data", name));
                None
            }
            Err(error) => {
                audit_warn(domain, &format!("{} failed: {}", name, error));
                Some(Sourced::Failed(SourceFailure::new(error)))
            }
        },
    }
}
