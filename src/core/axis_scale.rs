use std::fmt;

use tracing::warn;

use crate::core::{Axis, AxisRange, ScaleKind};
use crate::error::{ChartError, ChartResult};

/// Read-only view of the chart's per-axis scale configuration.
pub trait ScaleKindSource {
    /// Returns whether `axis` is configured with a logarithmic scale.
    fn is_log_scale(&self, axis: Axis) -> bool;
}

/// Every axis uses the same kind.
impl ScaleKindSource for ScaleKind {
    fn is_log_scale(&self, _axis: Axis) -> bool {
        self.is_logarithmic()
    }
}

impl<T: ScaleKindSource + ?Sized> ScaleKindSource for &T {
    fn is_log_scale(&self, axis: Axis) -> bool {
        (**self).is_log_scale(axis)
    }
}

/// Value-scaling strategy for chart axes.
///
/// Holds nothing but a borrowed handle to the scale configuration. The scale
/// kind is looked up on every call, so configuration changes are picked up
/// immediately and no conversion result is ever cached.
///
/// None of the conversions fail: out-of-domain logarithmic inputs come back
/// as non-finite numbers, and [`AxisScale::range_error`] is the check to run
/// before trusting logarithmic range math.
pub struct AxisScale<'a, G: ?Sized> {
    graph: &'a G,
}

impl<G: ?Sized> Clone for AxisScale<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for AxisScale<'_, G> {}

impl<G: ?Sized> fmt::Debug for AxisScale<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisScale").finish_non_exhaustive()
    }
}

impl<'a, G: ScaleKindSource + ?Sized> AxisScale<'a, G> {
    #[must_use]
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Resolves the scale kind currently configured for `axis`.
    #[must_use]
    pub fn scale_kind(self, axis: Axis) -> ScaleKind {
        ScaleKind::from_log_flag(self.graph.is_log_scale(axis))
    }

    /// Converts a raw data value to its scaled equivalent (`log10` on log axes).
    #[must_use]
    pub fn data_point_to_scaled_value(self, axis: Axis, value: f64) -> f64 {
        self.scale_kind(axis).to_scaled(value)
    }

    /// Converts a scaled value back to a raw data value (`10^sv` on log axes).
    #[must_use]
    pub fn scaled_value_to_data_point(self, axis: Axis, scaled_value: f64) -> f64 {
        self.scale_kind(axis).from_scaled(scaled_value)
    }

    /// Maps a relative position within `[range_start, range_end]` to a data value.
    ///
    /// Logarithmic callers are expected to have checked the range with
    /// [`AxisScale::range_error`] first.
    #[must_use]
    pub fn relative_scaled_value_to_data_point(
        self,
        axis: Axis,
        relative_scaled_value: f64,
        range_start: f64,
        range_end: f64,
        invert: bool,
    ) -> f64 {
        self.scale_kind(axis)
            .relative_to_data(relative_scaled_value, range_start, range_end, invert)
    }

    /// Maps a data value back to its relative position within the range.
    ///
    /// Returns NaN for values outside the logarithmic domain.
    #[must_use]
    pub fn data_point_to_relative_scaled_value(
        self,
        axis: Axis,
        value: f64,
        range_start: f64,
        range_end: f64,
        invert: bool,
    ) -> f64 {
        self.scale_kind(axis)
            .data_to_relative(value, range_start, range_end, invert)
    }

    /// Returns `true` when the range would produce non-finite log-scale math.
    ///
    /// Always `false` for linear axes. The range itself is left untouched.
    #[must_use]
    pub fn range_error(self, axis: Axis, range_start: f64, range_end: f64) -> bool {
        self.scale_kind(axis).range_error(range_start, range_end)
    }

    #[must_use]
    pub fn relative_to_data_in(
        self,
        axis: Axis,
        relative_scaled_value: f64,
        range: AxisRange,
        invert: bool,
    ) -> f64 {
        self.relative_scaled_value_to_data_point(
            axis,
            relative_scaled_value,
            range.start,
            range.end,
            invert,
        )
    }

    #[must_use]
    pub fn data_to_relative_in(
        self,
        axis: Axis,
        value: f64,
        range: AxisRange,
        invert: bool,
    ) -> f64 {
        self.data_point_to_relative_scaled_value(axis, value, range.start, range.end, invert)
    }

    /// Checked counterpart of [`AxisScale::range_error`].
    ///
    /// Rejects non-finite bounds on any axis and ranges flagged by
    /// `range_error`. Repairing the range is left to the caller.
    pub fn validate_range(self, axis: Axis, range_start: f64, range_end: f64) -> ChartResult<()> {
        if !range_start.is_finite() || !range_end.is_finite() {
            warn!(%axis, range_start, range_end, "rejecting non-finite axis range");
            return Err(ChartError::InvalidData(
                "axis range bounds must be finite".to_owned(),
            ));
        }

        if self.range_error(axis, range_start, range_end) {
            warn!(%axis, range_start, range_end, "rejecting invalid logarithmic axis range");
            return Err(ChartError::InvalidLogRange {
                axis,
                start: range_start,
                end: range_end,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{AxisScale, ScaleKindSource};
    use crate::core::{Axis, ScaleKind};
    use crate::error::ChartError;

    struct LogOnY2;

    impl ScaleKindSource for LogOnY2 {
        fn is_log_scale(&self, axis: Axis) -> bool {
            axis == Axis::Y2
        }
    }

    struct CountingSource {
        queries: Cell<usize>,
        log: bool,
    }

    impl ScaleKindSource for CountingSource {
        fn is_log_scale(&self, _axis: Axis) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.log
        }
    }

    #[test]
    fn scale_kind_is_resolved_per_axis() {
        let scale = AxisScale::new(&LogOnY2);
        assert_eq!(scale.scale_kind(Axis::X), ScaleKind::Linear);
        assert_eq!(scale.scale_kind(Axis::Y), ScaleKind::Linear);
        assert_eq!(scale.scale_kind(Axis::Y2), ScaleKind::Logarithmic);

        assert_eq!(scale.data_point_to_scaled_value(Axis::Y, 100.0), 100.0);
        assert_eq!(scale.data_point_to_scaled_value(Axis::Y2, 100.0), 2.0);
    }

    #[test]
    fn every_call_queries_the_source_again() {
        let source = CountingSource {
            queries: Cell::new(0),
            log: true,
        };
        let scale = AxisScale::new(&source);

        let _ = scale.data_point_to_scaled_value(Axis::Y, 10.0);
        let _ = scale.scaled_value_to_data_point(Axis::Y, 1.0);
        let _ = scale.relative_scaled_value_to_data_point(Axis::Y, 0.5, 1.0, 100.0, false);
        let _ = scale.data_point_to_relative_scaled_value(Axis::Y, 10.0, 1.0, 100.0, false);
        let _ = scale.range_error(Axis::Y, 1.0, 100.0);

        assert_eq!(source.queries.get(), 5);
    }

    #[test]
    fn validate_range_reports_typed_errors() {
        let scale = AxisScale::new(&ScaleKind::Logarithmic);
        assert!(scale.validate_range(Axis::Y, 1.0, 1000.0).is_ok());

        let err = scale
            .validate_range(Axis::Y, -1.0, 10.0)
            .expect_err("negative log bound must be rejected");
        assert!(matches!(
            err,
            ChartError::InvalidLogRange { axis: Axis::Y, .. }
        ));

        let err = scale
            .validate_range(Axis::X, 1.0, f64::INFINITY)
            .expect_err("infinite bound must be rejected");
        assert!(matches!(err, ChartError::InvalidData(_)));

        let linear = AxisScale::new(&ScaleKind::Linear);
        assert!(linear.validate_range(Axis::Y, -1.0, 10.0).is_ok());
        assert!(linear.validate_range(Axis::Y, f64::NAN, 10.0).is_err());
    }
}
