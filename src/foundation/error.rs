/// Convenience result type used across the crate.
pub type BrenResult<T> = Result<T, BrenError>;

/// Top-level error taxonomy.
///
/// Missing artwork and empty part bounds are not errors: the compositor skips them silently.
#[derive(thiserror::Error, Debug)]
pub enum BrenError {
    /// Invalid user-provided configuration or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The static character registry is missing data for a lookup it must answer.
    #[error("registry error: {0}")]
    Registry(String),

    /// Part artwork could not be located or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Raster backend failures (surface sizes, buffer mismatches).
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrenError {
    /// Build a [`BrenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrenError::Registry`] value.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`BrenError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`BrenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
