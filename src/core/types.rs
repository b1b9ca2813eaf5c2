use std::fmt;

use serde::{Deserialize, Serialize};

/// Chart axis a scale query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Y2,
}

impl Axis {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Y2 => "y2",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current data-space bounds of an axis.
///
/// Bounds are stored as given: `start > end` and zero-width ranges are
/// representable, and nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_zero_width(self) -> bool {
        self.width() == 0.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}
