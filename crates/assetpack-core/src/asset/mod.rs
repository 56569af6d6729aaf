//! Asset loading and path derivation.
//!
//! This module covers the input side of the packer: reading a file's raw
//! bytes into an [`Asset`], inferring the output header path from the input
//! path, and deriving a C++ namespace identifier from a header's file stem.
//!
//! Asset content is never interpreted. A PNG, a font, and a text file all
//! pack identically: as an opaque, ordered byte sequence.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Extension used for generated headers
const HEADER_EXTENSION: &str = "hpp";

/// An immutable binary asset: raw bytes plus the path they were read from
#[derive(Debug, Clone)]
pub struct Asset {
    data: Vec<u8>,
    source: PathBuf,
}

impl Asset {
    /// Reads the full content of a file into an asset.
    ///
    /// Fails with [`Error::FileRead`] if the path does not exist or is
    /// unreadable.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| Error::file_read(path, e))?;
        trace!("Read {} bytes from {}", data.len(), path.display());

        Ok(Self {
            data,
            source: path.to_path_buf(),
        })
    }

    /// Creates an asset from in-memory bytes (primarily for tests)
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            source: PathBuf::new(),
        }
    }

    /// Returns the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of bytes in the asset
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the asset holds no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the path the asset was read from
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Infers the output header path from an input path.
///
/// The input's extension is replaced with `.hpp`; when the input has no
/// extension, `.hpp` is appended (`image.png` → `image.hpp`, `sprites` →
/// `sprites.hpp`).
pub fn infer_output_path(input: impl AsRef<Path>) -> PathBuf {
    let mut output = input.as_ref().to_path_buf();
    output.set_extension(HEADER_EXTENSION);
    output
}

/// Derives a namespace identifier from the output header's file stem.
///
/// `fire_app.hpp` yields `fire_app`. The stem is sanitized into a valid
/// C/C++ identifier: anything outside `[A-Za-z0-9_]` becomes `_`, and a
/// leading digit gets a `_` prefix. Fails with [`Error::InvalidNamespace`]
/// when the path has no usable stem.
pub fn namespace_for(output: impl AsRef<Path>) -> Result<String> {
    let output = output.as_ref();
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::invalid_namespace(output.to_string_lossy()))?;

    sanitize_identifier(stem)
}

/// Sanitizes an arbitrary string into a valid C/C++ identifier
fn sanitize_identifier(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::invalid_namespace(name));
    }

    let mut out = String::with_capacity(name.len() + 1);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_digit() {
            if i == 0 {
                out.push('_');
            }
            out.push(c);
        } else if c.is_ascii_alphabetic() || c == '_' {
            out.push(c);
        } else {
            out.push('_');
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_bytes() {
        let asset = Asset::from_bytes(vec![1, 2, 3]);
        assert_eq!(asset.len(), 3);
        assert!(!asset.is_empty());
        assert_eq!(asset.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_empty_asset() {
        let asset = Asset::from_bytes(Vec::new());
        assert_eq!(asset.len(), 0);
        assert!(asset.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let err = Asset::read("/nonexistent/fire.png").unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_infer_output_path() {
        assert_eq!(infer_output_path("image.png"), PathBuf::from("image.hpp"));
        assert_eq!(
            infer_output_path("assets/fire.tar.gz"),
            PathBuf::from("assets/fire.tar.hpp")
        );
        assert_eq!(infer_output_path("sprites"), PathBuf::from("sprites.hpp"));
    }

    #[test]
    fn test_namespace_from_stem() {
        assert_eq!(namespace_for("fire_app.hpp").unwrap(), "fire_app");
        assert_eq!(namespace_for("assets/fire.hpp").unwrap(), "fire");
    }

    #[test]
    fn test_namespace_sanitization() {
        assert_eq!(namespace_for("my-icon.hpp").unwrap(), "my_icon");
        assert_eq!(namespace_for("8ball.hpp").unwrap(), "_8ball");
        assert_eq!(namespace_for("sprite v2.hpp").unwrap(), "sprite_v2");
    }

    #[test]
    fn test_namespace_invalid() {
        assert!(matches!(
            sanitize_identifier(""),
            Err(Error::InvalidNamespace { .. })
        ));
    }
}
