/// Convenience alias used throughout the crate.
pub type PenumbraResult<T> = Result<T, PenumbraError>;

/// Error taxonomy for the shadow pipeline.
///
/// Initialization failures ([`PenumbraError::RenderingUnavailable`]) are fatal
/// to a renderer instance and surface synchronously at setup time. Per-frame
/// failures ([`PenumbraError::SourceUnavailable`], [`PenumbraError::InvalidDimensions`])
/// are recoverable: the renderer keeps the previous frame's output.
#[derive(thiserror::Error, Debug)]
pub enum PenumbraError {
    /// Settings or inputs that fail structural validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The configured occluder source could not be decoded or read.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// The renderer cannot run at all (bad setup, or already disposed).
    #[error("rendering unavailable: {0}")]
    RenderingUnavailable(String),

    /// Zero or otherwise unusable target dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PenumbraError {
    /// Build a [`PenumbraError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PenumbraError::SourceUnavailable`].
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }

    /// Build a [`PenumbraError::RenderingUnavailable`].
    pub fn rendering_unavailable(msg: impl Into<String>) -> Self {
        Self::RenderingUnavailable(msg.into())
    }

    /// Build a [`PenumbraError::InvalidDimensions`].
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
