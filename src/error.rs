use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid {axis} axis: {reason}")]
    InvalidAxis { axis: &'static str, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("surface backend failure: {0}")]
    Backend(String),
}
