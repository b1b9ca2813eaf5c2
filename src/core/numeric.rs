//! Numeric helpers shared by the logarithmic scale math.

/// Base of the logarithmic axis scale.
pub const LOG_SCALE_BASE: f64 = 10.0;

/// Base-10 logarithm that never panics.
///
/// `0.0` maps to negative infinity and negative or NaN input maps to NaN, so
/// callers see a non-finite value instead of an error.
#[must_use]
pub fn log10(value: f64) -> f64 {
    value.log10()
}

/// Returns the data value at logarithmic fraction `frac` between two bounds.
///
/// `frac = 0` yields `range_start`, `frac = 1` yields `range_end`. Fractions
/// outside `[0, 1]` extrapolate along the same geometric progression.
#[must_use]
pub fn log_range_fraction(range_start: f64, range_end: f64, frac: f64) -> f64 {
    let log_start = log10(range_start);
    let log_end = log10(range_end);
    let exponent = log_start + frac * (log_end - log_start);
    LOG_SCALE_BASE.powf(exponent)
}

/// Replaces an exactly-zero width by `1.0` so divisions stay finite.
#[must_use]
pub(crate) fn non_zero_width(width: f64) -> f64 {
    if width == 0.0 { 1.0 } else { width }
}
