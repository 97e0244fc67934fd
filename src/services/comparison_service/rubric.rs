use crate::models::record::{SecurityPosture, SeoSnapshot};

const TITLE_LENGTH: std::ops::RangeInclusive<u32> = 30..=60;
const DESCRIPTION_LENGTH: std::ops::RangeInclusive<u32> = 120..=160;

/// On-page SEO rubric, 0-100.
pub fn seo_rubric_score(seo: &SeoSnapshot) -> u32 {
    let in_range = |length: Option<u32>, range: &std::ops::RangeInclusive<u32>| {
        length.is_some_and(|l| range.contains(&l))
    };
    let checks: [(bool, u32); 11] = [
        (seo.meta_tags.has_title, 10),
        (seo.meta_tags.has_description, 10),
        (seo.canonical, 10),
        (in_range(seo.title_length, &TITLE_LENGTH), 5),
        (in_range(seo.description_length, &DESCRIPTION_LENGTH), 5),
        (seo.headings.h1_count == 1, 10),
        (seo.headings.h2_count > 0, 5),
        (seo.headings.h3_count > 0, 5),
        (seo.open_graph, 10),
        (seo.twitter_card, 10),
        (seo.structured_data_count > 0, 20),
    ];
    checks
        .iter()
        .filter(|(passed, _)| *passed)
        .map(|(_, points)| points)
        .sum()
}

/// HTTPS 50, no mixed content 30, CDN 20.
pub fn security_score(posture: &SecurityPosture, https: bool) -> u32 {
    let mut score = 0;
    if https {
        score += 50;
    }
    if !posture.mixed_content.unwrap_or(false) {
        score += 30;
    }
    if posture.has_cdn() {
        score += 20;
    }
    score
}
