use smallvec::SmallVec;

use crate::core::{Axis, AxisRange, AxisScale, ScaleKindSource};

/// Gridline data values; inline storage covers typical axis densities.
pub type GridlineValues = SmallVec<[f64; 16]>;

impl<G: ScaleKindSource + ?Sized> AxisScale<'_, G> {
    /// Builds `count` gridline values evenly spaced in scaled space.
    ///
    /// Logarithmic axes therefore get geometrically spaced values. Both
    /// bounds are returned exactly as given. Non-finite bounds and ranges
    /// flagged by [`AxisScale::range_error`] yield no gridlines.
    #[must_use]
    pub fn gridline_values(self, axis: Axis, range: AxisRange, count: usize) -> GridlineValues {
        if count == 0 || !range.is_finite() || self.range_error(axis, range.start, range.end) {
            return GridlineValues::new();
        }
        if count == 1 {
            return smallvec::smallvec![range.start];
        }

        let scaled_start = self.data_point_to_scaled_value(axis, range.start);
        let scaled_end = self.data_point_to_scaled_value(axis, range.end);
        let scaled_span = scaled_end - scaled_start;
        let last = count - 1;
        let denominator = last as f64;

        (0..count)
            .map(|index| match index {
                0 => range.start,
                i if i == last => range.end,
                i => {
                    let ratio = (i as f64) / denominator;
                    self.scaled_value_to_data_point(axis, scaled_start + scaled_span * ratio)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Axis, AxisRange, AxisScale, ScaleKind};

    #[test]
    fn linear_gridlines_are_evenly_spaced() {
        let scale = AxisScale::new(&ScaleKind::Linear);
        let values = scale.gridline_values(Axis::X, AxisRange::new(0.0, 100.0), 5);
        assert_eq!(values.as_slice(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn log_gridlines_follow_decades() {
        let scale = AxisScale::new(&ScaleKind::Logarithmic);
        let values = scale.gridline_values(Axis::Y, AxisRange::new(1.0, 1000.0), 4);
        let expected = [1.0, 10.0, 100.0, 1000.0];
        assert_eq!(values.len(), expected.len());
        for (value, expected) in values.iter().zip(expected) {
            assert!((value - expected).abs() <= expected * 1e-12);
        }
    }

    #[test]
    fn gridlines_handle_degenerate_requests() {
        let scale = AxisScale::new(&ScaleKind::Logarithmic);
        assert!(
            scale
                .gridline_values(Axis::Y, AxisRange::new(1.0, 10.0), 0)
                .is_empty()
        );
        assert_eq!(
            scale
                .gridline_values(Axis::Y, AxisRange::new(3.0, 10.0), 1)
                .as_slice(),
            &[3.0]
        );
        assert!(
            scale
                .gridline_values(Axis::Y, AxisRange::new(-1.0, 10.0), 4)
                .is_empty()
        );
    }

    #[test]
    fn descending_range_keeps_direction() {
        let scale = AxisScale::new(&ScaleKind::Linear);
        let values = scale.gridline_values(Axis::Y, AxisRange::new(10.0, 0.0), 3);
        assert_eq!(values.as_slice(), &[10.0, 5.0, 0.0]);
    }
}
