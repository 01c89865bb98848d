/// Convenience result type used across the slider engine.
pub type SliderResult<T> = Result<T, SliderError>;

/// Error taxonomy for slider construction and configuration loading.
///
/// Runtime operations (scene changes, resizes, ticks) never fail: invalid targets are ignored.
/// Errors only surface while a configuration or stage is being validated.
#[derive(thiserror::Error, Debug)]
pub enum SliderError {
    /// Invalid configuration or stage data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A piece or group attribute could not be parsed.
    #[error("attribute error: {0}")]
    Attribute(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SliderError {
    /// Build a [`SliderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SliderError::Attribute`] value.
    pub fn attribute(msg: impl Into<String>) -> Self {
        Self::Attribute(msg.into())
    }

    /// Build a [`SliderError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SliderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
