use serde::{Deserialize, Serialize};

use crate::core::numeric::{LOG_SCALE_BASE, log_range_fraction, log10, non_zero_width};

/// Mapping mode used by an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// Uniform spacing in raw data units.
    #[default]
    Linear,
    /// Uniform spacing in base-10 log units (bounds must be > 0).
    #[serde(alias = "log")]
    Logarithmic,
}

impl ScaleKind {
    #[must_use]
    pub fn from_log_flag(is_log: bool) -> Self {
        if is_log {
            Self::Logarithmic
        } else {
            Self::Linear
        }
    }

    #[must_use]
    pub fn is_logarithmic(self) -> bool {
        matches!(self, Self::Logarithmic)
    }

    /// Maps a raw data value into scaled space, ignoring any range.
    ///
    /// Logarithmic scaling of `value <= 0` yields a non-finite result.
    #[must_use]
    pub fn to_scaled(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Logarithmic => log10(value),
        }
    }

    /// Inverse of [`ScaleKind::to_scaled`].
    #[must_use]
    pub fn from_scaled(self, scaled: f64) -> f64 {
        match self {
            Self::Linear => scaled,
            Self::Logarithmic => LOG_SCALE_BASE.powf(scaled),
        }
    }

    /// Maps a relative position to a data value between the range bounds.
    ///
    /// `relative` is not clamped. With `invert`, `0` maps to `range_end` and
    /// `1` maps to `range_start`.
    #[must_use]
    pub fn relative_to_data(
        self,
        relative: f64,
        range_start: f64,
        range_end: f64,
        invert: bool,
    ) -> f64 {
        match self {
            Self::Linear => {
                let range_width = range_end - range_start;
                if invert {
                    range_end - relative * range_width
                } else {
                    range_start + relative * range_width
                }
            }
            Self::Logarithmic => {
                if invert {
                    log_range_fraction(range_end, range_start, relative)
                } else {
                    log_range_fraction(range_start, range_end, relative)
                }
            }
        }
    }

    /// Inverse of [`ScaleKind::relative_to_data`].
    ///
    /// Zero-width ranges use a width of `1.0`. On a logarithmic axis any
    /// non-finite position is reported as NaN, never as an infinity.
    #[must_use]
    pub fn data_to_relative(
        self,
        value: f64,
        range_start: f64,
        range_end: f64,
        invert: bool,
    ) -> f64 {
        let relative = match self {
            Self::Linear => (value - range_start) / non_zero_width(range_end - range_start),
            Self::Logarithmic => {
                let log_range_start = log10(range_start);
                let log_range_width = non_zero_width(log10(range_end) - log_range_start);
                let relative = (log10(value) - log_range_start) / log_range_width;
                if relative.is_finite() {
                    relative
                } else {
                    f64::NAN
                }
            }
        };

        if invert { 1.0 - relative } else { relative }
    }

    /// Returns `true` when the range cannot drive this scale's math.
    ///
    /// Linear ranges are never rejected. Logarithmic ranges are rejected when
    /// a bound is non-positive or the bounds collapse to a non-finite log width.
    #[must_use]
    pub fn range_error(self, range_start: f64, range_end: f64) -> bool {
        match self {
            Self::Linear => false,
            Self::Logarithmic => {
                let log_range_width = non_zero_width(log10(range_end) - log10(range_start));
                let log_scale = 1.0 / log_range_width;
                !log_scale.is_finite() || !log_range_width.is_finite()
            }
        }
    }
}
