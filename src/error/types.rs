use thiserror::Error;

/// Unified result type for the masonry layout crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the layout strategies and their outer surfaces.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("item {index} has invalid dimensions {width}x{height}")]
    InvalidItem { index: usize, width: f64, height: f64 },
    #[error("invalid layout parameters: {0}")]
    InvalidParameters(String),
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl LayoutError {
    pub(crate) fn params(message: impl Into<String>) -> Self {
        Self::InvalidParameters(message.into())
    }
}
