//! Per-axis scale configuration.
//!
//! The chart owns which axis is logarithmic; this table is the serializable
//! form of that choice and the in-crate implementation of
//! [`ScaleKindSource`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, ScaleKind, ScaleKindSource};
use crate::error::ChartResult;

/// Scale kind per axis. Axes without an entry are linear.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisScaleConfig {
    #[serde(default)]
    axes: IndexMap<Axis, ScaleKind>,
}

impl AxisScaleConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_axis(mut self, axis: Axis, kind: ScaleKind) -> Self {
        self.set_axis(axis, kind);
        self
    }

    #[must_use]
    pub fn with_log_scale(self, axis: Axis) -> Self {
        self.with_axis(axis, ScaleKind::Logarithmic)
    }

    /// Sets the kind for `axis`, returning the previously configured kind.
    pub fn set_axis(&mut self, axis: Axis, kind: ScaleKind) -> Option<ScaleKind> {
        self.axes.insert(axis, kind)
    }

    #[must_use]
    pub fn scale_kind(&self, axis: Axis) -> ScaleKind {
        self.axes.get(&axis).copied().unwrap_or_default()
    }

    /// Explicit entries in declaration order.
    pub fn axes(&self) -> impl Iterator<Item = (Axis, ScaleKind)> + '_ {
        self.axes.iter().map(|(axis, kind)| (*axis, *kind))
    }

    /// Parses a config such as `{"axes": {"x": "linear", "y": "log"}}`.
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            axes = config.axes.len(),
            log_axes = config.axes.values().filter(|kind| kind.is_logarithmic()).count(),
            "loaded axis scale config"
        );
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ScaleKindSource for AxisScaleConfig {
    fn is_log_scale(&self, axis: Axis) -> bool {
        self.scale_kind(axis).is_logarithmic()
    }
}
