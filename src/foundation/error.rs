use std::path::PathBuf;

/// Convenience result type used across shotframe.
pub type ShotframeResult<T> = Result<T, ShotframeError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ShotframeError {
    /// Invalid geometry or arguments passed to a library call.
    #[error("validation error: {0}")]
    Validation(String),

    /// The batch input path does not name an existing directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShotframeError {
    /// Build a [`ShotframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShotframeError::NotADirectory`] value.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory(path.into())
    }

    /// Render this error and every `source()` below it as `outer: inner: ...`.
    pub fn display_chain(&self) -> String {
        let mut out = self.to_string();
        let mut cur = std::error::Error::source(self);
        while let Some(err) = cur {
            out.push_str(": ");
            out.push_str(&err.to_string());
            cur = err.source();
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
