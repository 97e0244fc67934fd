use crate::models::record::{MetaTags, PageScan, SeoSnapshot, TechnicalSeo};
use crate::models::sources::{MetaShape, MetaTagState, PageScanPayload, SeoInput};
use crate::utils::serde_utils::{is_present, number_of, text_of};
use serde_json::Value;

pub fn normalize_page_scan(payload: &PageScanPayload) -> PageScan {
    PageScan {
        seo: payload.seo.as_ref().map(page_seo),
        content: payload.content.clone(),
        technology: payload.technology.clone(),
        security: payload.security.clone(),
        robots_txt: payload.robots_txt.as_ref().map(is_present),
        sitemap: payload.sitemap.as_ref().map(is_present),
    }
}

/// Canonical SEO facts from a full-page scan.
pub fn page_seo(input: &SeoInput) -> SeoSnapshot {
    let (meta_tags, title_length, description_length) = reconcile_meta(input.meta_shape());
    let nested_canonical = input.meta_tags.as_ref().and_then(|m| m.canonical.as_ref());
    SeoSnapshot {
        meta_tags,
        canonical: input
            .canonical
            .as_ref()
            .or(nested_canonical)
            .map(is_present)
            .unwrap_or(false),
        title_length,
        description_length,
        headings: input
            .headings
            .as_ref()
            .map(|h| h.counts())
            .unwrap_or_default(),
        open_graph: input.open_graph.as_ref().map(is_present).unwrap_or(false),
        twitter_card: input.twitter_card.as_ref().map(is_present).unwrap_or(false),
        structured_data_count: input
            .schema_markup
            .as_ref()
            .map(structured_data_count)
            .unwrap_or(0),
    }
}

/// One canonical `{hasTitle, hasDescription, title, description}` from
/// either meta-tag shape, plus the tag lengths when known.
pub fn reconcile_meta(shape: MetaShape<'_>) -> (MetaTags, Option<u32>, Option<u32>) {
    match shape {
        MetaShape::Nested(nested) => {
            let (has_title, title, title_length) = nested_tag(nested.title.as_ref());
            let (has_description, description, description_length) =
                nested_tag(nested.meta_description.as_ref());
            (
                MetaTags {
                    has_title,
                    has_description,
                    title,
                    description,
                },
                title_length,
                description_length,
            )
        }
        MetaShape::Flat { title, description } => {
            let (has_title, title) = flat_tag(title);
            let (has_description, description) = flat_tag(description);
            let title_length = title.as_deref().map(char_length);
            let description_length = description.as_deref().map(char_length);
            (
                MetaTags {
                    has_title,
                    has_description,
                    title,
                    description,
                },
                title_length,
                description_length,
            )
        }
        MetaShape::Missing => (MetaTags::default(), None, None),
    }
}

fn nested_tag(state: Option<&MetaTagState>) -> (bool, Option<String>, Option<u32>) {
    let Some(state) = state else {
        return (false, None, None);
    };
    let content = state.content.clone();
    let exists = state.exists.unwrap_or(content.is_some());
    let length = state
        .length
        .map(|l| l.max(0.0).round() as u32)
        .or_else(|| content.as_deref().map(char_length));
    (exists, content, if exists { length } else { None })
}

fn flat_tag(value: Option<&Value>) -> (bool, Option<String>) {
    match value {
        Some(value) => {
            let text = text_of(value);
            (text.is_some() || is_present(value), text)
        }
        None => (false, None),
    }
}

fn char_length(text: &str) -> u32 {
    text.chars().count() as u32
}

fn structured_data_count(value: &Value) -> u32 {
    match value {
        Value::Array(items) => items.len() as u32,
        Value::Object(map) => match map.get("count").and_then(number_of) {
            Some(count) => count.max(0.0).round() as u32,
            None => u32::from(!map.is_empty()),
        },
        other => match number_of(other) {
            Some(count) => count.max(0.0).round() as u32,
            None => u32::from(is_present(other)),
        },
    }
}

/// Merge the scan's SEO block with the lighter technical SEO pass. For each
/// field the scan wins when it has something, then the technical pass, then
/// the zero default.
pub fn merge_seo(scan: Option<&SeoSnapshot>, technical: Option<&TechnicalSeo>) -> Option<SeoSnapshot> {
    if scan.is_none() && technical.is_none() {
        return None;
    }
    let base = scan.cloned().unwrap_or_default();
    let meta_check = technical.and_then(|t| t.meta_tags.as_ref());

    let has_title =
        base.meta_tags.has_title || meta_check.and_then(|c| c.has_title).unwrap_or(false);
    let has_description = base.meta_tags.has_description
        || meta_check.and_then(|c| c.has_description).unwrap_or(false);
    let meta_tags = MetaTags {
        has_title,
        has_description,
        ..base.meta_tags.clone()
    };

    // A length only counts for a tag that exists.
    let check_length = |length: Option<f64>| length.map(|l| l.max(0.0).round() as u32);
    let title_length = base
        .title_length
        .or_else(|| check_length(meta_check.and_then(|c| c.title_length)))
        .filter(|_| has_title);
    let description_length = base
        .description_length
        .or_else(|| check_length(meta_check.and_then(|c| c.description_length)))
        .filter(|_| has_description);

    let headings = if !base.headings.is_empty() {
        base.headings
    } else {
        technical
            .and_then(|t| t.headings.as_ref())
            .map(|h| h.counts())
            .filter(|counts| !counts.is_empty())
            .unwrap_or_default()
    };

    let structured_data_count = if base.structured_data_count > 0 {
        base.structured_data_count
    } else {
        match technical.and_then(|t| t.structured_data.as_ref()) {
            Some(check) if check.has_structured_data == Some(true) => (check.types.len() as u32).max(1),
            _ => 0,
        }
    };

    Some(SeoSnapshot {
        meta_tags,
        canonical: base.canonical || meta_check.and_then(|c| c.has_canonical).unwrap_or(false),
        title_length,
        description_length,
        headings,
        open_graph: base.open_graph,
        twitter_card: base.twitter_card,
        structured_data_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::HeadingCounts;
    use crate::services::comparison_service::rubric::seo_rubric_score;
    use serde_json::json;

    fn seo_input(value: Value) -> SeoInput {
        serde_json::from_value(value).expect("seo input")
    }

    #[test]
    fn nested_and_flat_meta_shapes_reconcile_to_one_form() {
        let nested = seo_input(json!({
            "metaTags": {
                "title": {"exists": true, "content": "Acme Widgets"},
                "metaDescription": {"exists": false}
            }
        }));
        let flat = seo_input(json!({"title": "Acme Widgets", "metaDescription": ""}));

        let (nested_meta, nested_len, _) = reconcile_meta(nested.meta_shape());
        let (flat_meta, flat_len, _) = reconcile_meta(flat.meta_shape());
        assert_eq!(nested_meta, flat_meta);
        assert!(nested_meta.has_title);
        assert!(!nested_meta.has_description);
        assert_eq!(nested_len, Some(12));
        assert_eq!(flat_len, Some(12));
    }

    #[test]
    fn missing_meta_shape_defaults_to_absent() {
        let input = seo_input(json!({"openGraph": {"og:title": "x"}}));
        assert_eq!(input.meta_shape(), MetaShape::Missing);
        let snapshot = page_seo(&input);
        assert!(!snapshot.meta_tags.has_title);
        assert!(snapshot.open_graph);
        assert_eq!(snapshot.headings, HeadingCounts::default());
    }

    #[test]
    fn scan_headings_win_over_technical_pass() {
        let scan = page_seo(&seo_input(json!({"headings": {"h1": ["Welcome"], "h2": ["A", "B"]}})));
        let technical: TechnicalSeo = serde_json::from_value(json!({
            "headings": {"h1Count": 3, "h2Count": 0, "h3Count": 0},
            "metaTags": {"hasTitle": true, "hasDescription": true, "titleLength": 48}
        }))
        .unwrap();

        let merged = merge_seo(Some(&scan), Some(&technical)).unwrap();
        assert_eq!(merged.headings.h1_count, 1);
        assert_eq!(merged.headings.h2_count, 2);
        assert!(merged.meta_tags.has_description);
        assert_eq!(merged.title_length, Some(48));
    }

    #[test]
    fn meta_flags_merge_per_tag_and_lengths_follow_their_tag() {
        let scan = page_seo(&seo_input(json!({"title": "Acme Widgets"})));
        let described: TechnicalSeo = serde_json::from_value(json!({
            "metaTags": {"hasDescription": true, "descriptionLength": 140}
        }))
        .unwrap();
        let merged = merge_seo(Some(&scan), Some(&described)).unwrap();
        assert!(merged.meta_tags.has_title);
        assert_eq!(merged.meta_tags.title.as_deref(), Some("Acme Widgets"));
        assert!(merged.meta_tags.has_description);
        assert_eq!(merged.description_length, Some(140));
        // title 10, description 10, description length 5
        assert_eq!(seo_rubric_score(&merged), 25);

        let undescribed: TechnicalSeo = serde_json::from_value(json!({
            "metaTags": {"hasDescription": false, "descriptionLength": 140}
        }))
        .unwrap();
        let merged = merge_seo(Some(&scan), Some(&undescribed)).unwrap();
        assert!(!merged.meta_tags.has_description);
        assert_eq!(merged.description_length, None);
        assert_eq!(seo_rubric_score(&merged), 10);
    }

    #[test]
    fn empty_scan_headings_fall_back_then_default_to_zero() {
        let technical: TechnicalSeo = serde_json::from_value(json!({
            "headings": {"h1Count": 2},
            "structuredData": {"hasStructuredData": true, "types": ["Organization", "WebSite"]}
        }))
        .unwrap();
        let merged = merge_seo(None, Some(&technical)).unwrap();
        assert_eq!(merged.headings.h1_count, 2);
        assert_eq!(merged.structured_data_count, 2);

        let bare = merge_seo(Some(&SeoSnapshot::default()), None).unwrap();
        assert_eq!(bare.headings, HeadingCounts { h1_count: 0, h2_count: 0, h3_count: 0 });
        assert!(merge_seo(None, None).is_none());
    }

    #[test]
    fn schema_markup_counts_blocks() {
        assert_eq!(structured_data_count(&json!([{"@type": "Organization"}])), 1);
        assert_eq!(structured_data_count(&json!(3)), 3);
        assert_eq!(structured_data_count(&json!({"count": 2})), 2);
        assert_eq!(structured_data_count(&json!(false)), 0);
    }
}
