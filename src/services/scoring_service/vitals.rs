use crate::models::record::{NormalizedSiteRecord, Vitals};
use crate::utils::score_utils::mean;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VitalRating {
    Good,
    NeedsImprovement,
    Poor,
}

impl VitalRating {
    pub fn points(&self) -> f64 {
        match self {
            VitalRating::Good => 100.0,
            VitalRating::NeedsImprovement => 50.0,
            VitalRating::Poor => 0.0,
        }
    }
}

/// Upper bounds for "good" and "needs improvement".
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub good: f64,
    pub poor: f64,
}

pub const LCP_MS: Thresholds = Thresholds { good: 2500.0, poor: 4000.0 };
pub const FID_MS: Thresholds = Thresholds { good: 100.0, poor: 300.0 };
pub const INP_MS: Thresholds = Thresholds { good: 200.0, poor: 500.0 };
pub const CLS: Thresholds = Thresholds { good: 0.1, poor: 0.25 };

pub fn rate(value: f64, thresholds: Thresholds) -> VitalRating {
    if value <= thresholds.good {
        VitalRating::Good
    } else if value <= thresholds.poor {
        VitalRating::NeedsImprovement
    } else {
        VitalRating::Poor
    }
}

/// The three vitals that feed the technical score, from one source.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VitalReadings {
    pub lcp: Option<f64>,
    pub fid: Option<f64>,
    pub inp: Option<f64>,
    pub cls: Option<f64>,
}

impl VitalReadings {
    fn from_vitals(vitals: &Vitals) -> Self {
        VitalReadings {
            lcp: vitals.lcp,
            fid: vitals.fid,
            inp: vitals.inp,
            cls: vitals.cls,
        }
    }

    fn is_empty(&self) -> bool {
        self.lcp.is_none() && self.fid.is_none() && self.inp.is_none() && self.cls.is_none()
    }

    pub fn ratings(&self) -> Vec<VitalRating> {
        let responsiveness = match (self.inp, self.fid) {
            (Some(inp), _) => Some(rate(inp, INP_MS)),
            (None, Some(fid)) => Some(rate(fid, FID_MS)),
            (None, None) => None,
        };
        [
            self.lcp.map(|lcp| rate(lcp, LCP_MS)),
            responsiveness,
            self.cls.map(|cls| rate(cls, CLS)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// First source with any reading: PageSpeed mobile field data, then mobile
/// lab data, then the Lighthouse audits.
pub fn select_readings(record: &NormalizedSiteRecord) -> Option<VitalReadings> {
    let mobile = record.pagespeed().and_then(|speed| speed.mobile.as_ref());
    let field = mobile.and_then(|m| m.field_data.as_ref()).map(VitalReadings::from_vitals);
    let lab = mobile.and_then(|m| m.lab_data.as_ref()).map(VitalReadings::from_vitals);
    let lighthouse = record.lighthouse().map(|summary| VitalReadings {
        lcp: summary.vital("lcp"),
        fid: summary.vital("fid"),
        inp: summary.vital("inp"),
        cls: summary.vital("cls"),
    });
    [field, lab, lighthouse]
        .into_iter()
        .flatten()
        .find(|readings| !readings.is_empty())
}

/// Mean of the available vital ratings, or `None` with no readings at all.
pub fn core_vitals_score(record: &NormalizedSiteRecord) -> Option<f64> {
    let ratings = select_readings(record)?.ratings();
    let points: Vec<f64> = ratings.iter().map(VitalRating::points).collect();
    mean(&points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_edges_are_inclusive() {
        assert_eq!(rate(2500.0, LCP_MS), VitalRating::Good);
        assert_eq!(rate(2500.1, LCP_MS), VitalRating::NeedsImprovement);
        assert_eq!(rate(4000.0, LCP_MS), VitalRating::NeedsImprovement);
        assert_eq!(rate(0.26, CLS), VitalRating::Poor);
    }

    #[test]
    fn inp_takes_precedence_over_fid() {
        let readings = VitalReadings {
            lcp: None,
            fid: Some(50.0),
            inp: Some(600.0),
            cls: None,
        };
        assert_eq!(readings.ratings(), vec![VitalRating::Poor]);
    }
}
