//! Batch conversions for gridlines and series samples.

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use tracing::trace;

use crate::core::{Axis, AxisRange, AxisScale, ScaleKindSource};

impl<G: ScaleKindSource + ?Sized> AxisScale<'_, G> {
    /// Maps many relative positions to data values in one pass.
    ///
    /// The scale kind is resolved once for the whole batch; each element gets
    /// exactly the result of
    /// [`AxisScale::relative_scaled_value_to_data_point`].
    #[must_use]
    pub fn project_relative_values(
        self,
        axis: Axis,
        relative_values: &[f64],
        range: AxisRange,
        invert: bool,
    ) -> Vec<f64> {
        let kind = self.scale_kind(axis);
        trace!(%axis, count = relative_values.len(), ?kind, "project relative values");
        map_values(relative_values, |relative| {
            kind.relative_to_data(relative, range.start, range.end, invert)
        })
    }

    /// Maps many data values to relative positions in one pass.
    #[must_use]
    pub fn project_data_values(
        self,
        axis: Axis,
        values: &[f64],
        range: AxisRange,
        invert: bool,
    ) -> Vec<f64> {
        let kind = self.scale_kind(axis);
        trace!(%axis, count = values.len(), ?kind, "project data values");
        map_values(values, |value| {
            kind.data_to_relative(value, range.start, range.end, invert)
        })
    }
}

fn map_values<F>(values: &[f64], map: F) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    #[cfg(feature = "parallel-projection")]
    {
        values.par_iter().map(|value| map(*value)).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        values.iter().map(|value| map(*value)).collect()
    }
}
