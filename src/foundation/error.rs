use std::path::PathBuf;

/// Crate-wide result alias.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Errors surfaced by the generator.
///
/// Everything the generator consumes is self-generated, so the only fatal conditions are invalid
/// compiled-in configuration and output failures. All of them abort the run.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// Configuration is degenerate (zero sizes, out-of-range probabilities, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Compositing invariant violated (buffer size mismatch, patch outside the working canvas).
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem failure, tagged with the path that caused it.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// Path being created, removed or written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// JSON / tensor / image serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SpriteError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`SpriteError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
