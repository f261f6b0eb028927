/// Convenience result type used across the chart pipeline.
pub type ChartResult<T> = Result<T, ChartError>;

/// Top-level error taxonomy used by chart APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    /// Invalid caller-provided scores, request shape or style.
    #[error("validation error: {0}")]
    Validation(String),

    /// Artifact directory or file could not be created, written or named.
    #[error("storage error: {0}")]
    Storage(String),

    /// Raster engine or image codec fault.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Requested artifact does not exist in the store.
    #[error("not found: {0}")]
    NotFound(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    /// Build a [`ChartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChartError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`ChartError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build a [`ChartError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Whether the error was caused by the caller rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
