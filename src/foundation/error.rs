/// Convenience result type used across shotdeck.
pub type DeckResult<T> = Result<T, DeckError>;

/// Top-level error taxonomy used by deck APIs.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// Degenerate geometry rejected while building a visual element.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Invalid configuration, scene definition or navigation data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while producing SVG or raster output.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a [`DeckError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`DeckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DeckError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
