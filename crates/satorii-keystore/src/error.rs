//! Error types for keystore fixture generation

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for keystore fixture operations
pub type Result<T> = std::result::Result<T, KeystoreError>;

/// Errors that can occur while generating the keystore fixture
#[derive(Debug, Error)]
pub enum KeystoreError {
    /// The destination could not be opened, written or flushed
    #[error("Failed to write keystore fixture to {path}: {source}")]
    Io {
        /// Destination path of the fixture
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Binary encoding error
    #[error("Binary encoding error: {0}")]
    Encode(#[from] binrw::Error),
}

impl KeystoreError {
    /// Create an I/O error for the given destination
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Destination path involved in the failure, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Encode(_) => None,
        }
    }
}
