//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Definition parsing error.
    #[error("definition error: {0}")]
    Parse(#[from] skinsgen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] skinsgen_schema::SchemaError),

    /// Source unreadable or destination unwritable.
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates an IO error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error comes from the definition content rather
    /// than from the filesystem.
    #[must_use]
    pub fn is_definition_error(&self) -> bool {
        match self {
            Self::Parse(_) | Self::Schema(_) => true,
            Self::Io { .. } => false,
        }
    }
}
