//! chart-axis-scale: value scaling strategy for chart axes.
//!
//! Translates between raw data-space values and scaled or relative axis
//! positions for linear and logarithmic axes. The conversion functions are
//! pure and stateless; the scale kind of an axis is queried per call from a
//! caller-supplied [`ScaleKindSource`](crate::core::ScaleKindSource).

pub mod config;
pub mod core;
pub mod error;
pub mod telemetry;

pub use config::AxisScaleConfig;
pub use crate::core::{Axis, AxisRange, AxisScale, ScaleKind, ScaleKindSource};
pub use error::{ChartError, ChartResult};
