//! Error types for the assetpack-core library.
//!
//! This module provides error handling using the `thiserror` crate,
//! with detailed error variants for the different failure modes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assetpack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all assetpack operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to read input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Could not derive a usable namespace identifier
    #[error("cannot derive a namespace identifier from '{name}'")]
    InvalidNamespace {
        /// The offending file stem or override value
        name: String,
    },
}

impl Error {
    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a new invalid namespace error
    pub fn invalid_namespace(name: impl Into<String>) -> Self {
        Self::InvalidNamespace { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_namespace("");
        assert!(err.to_string().contains("namespace identifier"));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::file_read("/tmp/missing.png", io);
        assert!(err.to_string().contains("/tmp/missing.png"));
        assert!(err.to_string().contains("gone"));
    }
}
