use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("display surface `{id}` not found")]
    DisplaySurfaceMissing { id: String },

    #[error("renderer construction failed for `{id}`: {reason}")]
    RendererConstructionFailed { id: String, reason: String },

    #[error("series `{key}` unavailable: {reason}")]
    DataFetchUnavailable { key: String, reason: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

