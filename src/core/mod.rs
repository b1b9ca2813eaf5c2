pub mod axis_scale;
pub mod numeric;
pub mod projection;
pub mod scale;
pub mod ticks;
pub mod types;

pub use axis_scale::{AxisScale, ScaleKindSource};
pub use numeric::{log_range_fraction, log10};
pub use scale::ScaleKind;
pub use ticks::GridlineValues;
pub use types::{Axis, AxisRange};
