/// Convenience result type used across codeshot.
pub type CodeshotResult<T> = Result<T, CodeshotError>;

/// Top-level error taxonomy used by the rendering pipeline.
#[derive(thiserror::Error, Debug)]
pub enum CodeshotError {
    /// Missing or malformed setup data, such as a background's sidecar descriptor.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Lexer resolution exhausted the hint, content guessing and the fallback lexer.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// A background could not be read or an output could not be written.
    #[error("io error: {0}")]
    Io(String),

    /// A projective transform is malformed or cannot be solved.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Font resolution, text layout or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CodeshotError {
    /// Build a [`CodeshotError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`CodeshotError::UnknownLanguage`] value.
    pub fn unknown_language(msg: impl Into<String>) -> Self {
        Self::UnknownLanguage(msg.into())
    }

    /// Build a [`CodeshotError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`CodeshotError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`CodeshotError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
