use crate::models::record::NormalizedSiteRecord;
use crate::models::score::{DataQuality, QualityLevel, ScoreMode};

/// Sources a scoring mode reads, by wire name.
pub fn consumed_sources(mode: ScoreMode) -> &'static [&'static str] {
    match mode {
        ScoreMode::Basic => &["lighthouse", "pagespeed", "traffic"],
        ScoreMode::Enhanced => &["lighthouse", "pagespeed", "traffic", "searchConsole", "technicalSEO"],
    }
}

fn is_available(record: &NormalizedSiteRecord, source: &str) -> bool {
    match source {
        "lighthouse" => record.lighthouse().is_some(),
        "pagespeed" => record.pagespeed().is_some(),
        "traffic" => record.traffic().is_some(),
        "searchConsole" => record.search_console().is_some(),
        "technicalSEO" => record.technical_seo().is_some(),
        _ => false,
    }
}

pub fn data_quality(record: &NormalizedSiteRecord, mode: ScoreMode) -> DataQuality {
    let sources = consumed_sources(mode);
    let missing: Vec<String> = sources
        .iter()
        .filter(|source| !is_available(record, source))
        .map(|source| source.to_string())
        .collect();
    let total_sources = sources.len();
    let available_sources = total_sources - missing.len();
    let completeness = (available_sources as f64 / total_sources as f64 * 100.0).round();
    let level = if completeness >= 80.0 {
        QualityLevel::High
    } else if completeness >= 60.0 {
        QualityLevel::Medium
    } else {
        QualityLevel::Limited
    };
    DataQuality {
        available_sources,
        total_sources,
        completeness,
        level,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{
        LighthouseSummary, PageSpeed, SearchConsoleSummary, Sourced, TechnicalSeo, TrafficSummary,
    };

    fn record_with(sources: &[&str]) -> NormalizedSiteRecord {
        let mut record = NormalizedSiteRecord::empty("example.com");
        for source in sources {
            match *source {
                "lighthouse" => record.lighthouse = Some(Sourced::Available(LighthouseSummary::default())),
                "pagespeed" => record.pagespeed = Some(Sourced::Available(PageSpeed::default())),
                "traffic" => record.traffic = Some(Sourced::Available(TrafficSummary::default())),
                "searchConsole" => {
                    record.search_console = Some(Sourced::Available(SearchConsoleSummary::default()))
                }
                _ => record.technical_seo = Some(Sourced::Available(TechnicalSeo::default())),
            }
        }
        record
    }

    #[test]
    fn four_of_five_sources_is_high() {
        let record = record_with(&["lighthouse", "pagespeed", "traffic", "searchConsole"]);
        let quality = data_quality(&record, ScoreMode::Enhanced);
        assert_eq!(quality.available_sources, 4);
        assert_eq!(quality.completeness, 80.0);
        assert_eq!(quality.level, QualityLevel::High);
        assert_eq!(quality.missing, vec!["technicalSEO".to_string()]);
    }

    #[test]
    fn three_of_five_sources_is_medium() {
        let record = record_with(&["lighthouse", "pagespeed", "technicalSEO"]);
        let quality = data_quality(&record, ScoreMode::Enhanced);
        assert_eq!(quality.completeness, 60.0);
        assert_eq!(quality.level, QualityLevel::Medium);
    }

    #[test]
    fn basic_mode_counts_only_its_own_sources() {
        let record = record_with(&["lighthouse", "traffic", "searchConsole", "technicalSEO"]);
        let quality = data_quality(&record, ScoreMode::Basic);
        assert_eq!(quality.total_sources, 3);
        assert_eq!(quality.available_sources, 2);
        assert_eq!(quality.completeness, 67.0);
        assert_eq!(quality.level, QualityLevel::Medium);
        assert_eq!(quality.missing, vec!["pagespeed".to_string()]);
    }
}
