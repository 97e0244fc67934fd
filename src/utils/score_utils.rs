use log::debug;

/// Clamp a computed score into the 0..=100 display range.
pub fn clamp_score(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    if !(0.0..=100.0).contains(&value) {
        debug!("Clamping out-of-range score {}", value);
    }
    value.clamp(0.0, 100.0)
}

/// Clamp then round half-up to a whole display score.
pub fn display_score(value: f64) -> u32 {
    clamp_score(value).round() as u32
}

/// 0-1 fraction to 0-100 display value.
pub fn fraction_to_display(fraction: f64) -> u32 {
    display_score(fraction * 100.0)
}

/// Blend two optional terms with fixed weights. When only one term is
/// present it stands alone; the split is never re-weighted.
pub fn blend_pair(primary: Option<f64>, secondary: Option<f64>, primary_weight: f64) -> Option<f64> {
    match (primary, secondary) {
        (Some(a), Some(b)) => Some(a * primary_weight + b * (1.0 - primary_weight)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Linear interpolation of `x` from `[x0, x1]` onto `[y0, y1]`.
pub fn interpolate(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if (x1 - x0).abs() < f64::EPSILON {
        return y1;
    }
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}
