/// Convenience result type used across Sponsorboard.
pub type SponsorboardResult<T> = Result<T, SponsorboardError>;

/// Top-level error taxonomy for the fallible edges of the crate.
///
/// Resolution, aggregation, classification and table layout never fail; these
/// variants cover configuration, serialization and rasterization.
#[derive(thiserror::Error, Debug)]
pub enum SponsorboardError {
    /// Invalid user-provided configuration or tier rules.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while producing markup or raster output.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SponsorboardError {
    /// Build a [`SponsorboardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SponsorboardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SponsorboardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SponsorboardError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
