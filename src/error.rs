use thiserror::Error;

use crate::core::Axis;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid logarithmic range on axis {axis}: start={start}, end={end}")]
    InvalidLogRange { axis: Axis, start: f64, end: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid axis scale config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
