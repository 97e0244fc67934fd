use crate::utils::serde_utils;
use serde::{Deserialize, Serialize};

/// Core Web Vitals as PageSpeed reports them. Timings are milliseconds,
/// `performanceScore` is 0-100 once normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub lcp: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub fid: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub inp: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub cls: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub fcp: Option<f64>,
    #[serde(default, deserialize_with = "serde_utils::number")]
    pub performance_score: Option<f64>,
}

impl Vitals {
    pub fn is_empty(&self) -> bool {
        self.lcp.is_none()
            && self.fid.is_none()
            && self.inp.is_none()
            && self.cls.is_none()
            && self.fcp.is_none()
            && self.performance_score.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedStrategy {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub field_data: Option<Vitals>,
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub lab_data: Option<Vitals>,
}

impl PageSpeedStrategy {
    /// Field data when it carries anything, otherwise lab data.
    pub fn preferred(&self) -> Option<&Vitals> {
        self.field_data
            .as_ref()
            .filter(|v| !v.is_empty())
            .or(self.lab_data.as_ref().filter(|v| !v.is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeed {
    #[serde(default, deserialize_with = "serde_utils::lenient")]
    pub mobile: Option<PageSpeedStrategy>,
    #[serde(default, deserialize_with = "serde_utils::lenient", skip_serializing_if = "Option::is_none")]
    pub desktop: Option<PageSpeedStrategy>,
}

impl PageSpeed {
    pub fn mobile_vitals(&self) -> Option<&Vitals> {
        self.mobile.as_ref().and_then(PageSpeedStrategy::preferred)
    }

    pub fn is_empty(&self) -> bool {
        let strategy_empty = |s: &Option<PageSpeedStrategy>| {
            s.as_ref().and_then(PageSpeedStrategy::preferred).is_none()
        };
        strategy_empty(&self.mobile) && strategy_empty(&self.desktop)
    }
}
