//! Header rendering and output writing.
//!
//! This module covers the output side of the packer: turning an asset's raw
//! bytes into the final C++ header text and writing it to disk atomically.
//!
//! ## Wire contract
//!
//! The generated text is a fixed template; every whitespace and punctuation
//! character in it is significant, since downstream regression checks compare
//! generated headers byte for byte. The template pieces live in constants in
//! this module so the format stays auditable and the hex rendering stays
//! testable in isolation.

pub mod hex;

use crate::asset::Asset;
use crate::error::{Error, Result};
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

/// First line of every generated header
const PRAGMA_LINE: &str = "#pragma once";

/// Include directive pulling in `std::size_t`
const INCLUDE_LINE: &str = "#include <cstddef>  // for std::size_t";

/// Default name for the embedded byte array
const DEFAULT_ARRAY_NAME: &str = "data";

/// Default name for the size constant
const DEFAULT_SIZE_NAME: &str = "size";

/// Configuration for header rendering
#[derive(Debug, Clone)]
pub struct HeaderConfig {
    /// Namespace wrapping the generated declarations
    pub namespace: String,
    /// Identifier for the byte array constant
    pub array_name: String,
    /// Identifier for the size constant
    pub size_name: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            namespace: "asset".to_string(),
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            size_name: DEFAULT_SIZE_NAME.to_string(),
        }
    }
}

impl HeaderConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace identifier
    pub fn namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespace = ns.into();
        self
    }

    /// Sets the byte array identifier
    pub fn array_name(mut self, name: impl Into<String>) -> Self {
        self.array_name = name.into();
        self
    }

    /// Sets the size constant identifier
    pub fn size_name(mut self, name: impl Into<String>) -> Self {
        self.size_name = name.into();
        self
    }
}

/// Renders asset bytes into C++ header text
#[derive(Debug, Clone, Default)]
pub struct HeaderRenderer {
    config: HeaderConfig,
}

impl HeaderRenderer {
    /// Creates a new renderer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new renderer with custom configuration
    pub fn with_config(config: HeaderConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Renders the complete header text for the given bytes.
    ///
    /// The size constant is emitted as `sizeof(<array>)` rather than a
    /// restated literal, so it can never drift from the actual element
    /// count. Empty input produces an empty array literal (`{}`).
    pub fn render(&self, data: &[u8]) -> String {
        trace!("Rendering {} bytes as hex literals", data.len());
        let literals = hex::render_bytes(data);

        format!(
            "{pragma}\n\n{include}\n\nnamespace {ns} {{\n\n\
             constexpr unsigned char {array}[] = {{{literals}}};\n\n\
             constexpr std::size_t {size} = sizeof({array});\n\n\
             }}  // namespace {ns}\n",
            pragma = PRAGMA_LINE,
            include = INCLUDE_LINE,
            ns = self.config.namespace,
            array = self.config.array_name,
            size = self.config.size_name,
            literals = literals,
        )
    }
}

/// Writes header text to the output path, overwriting any existing file.
///
/// The content is written to a temporary file in the destination directory
/// and renamed into place, so a failed invocation never leaves a partially
/// written header that could be mistaken for a valid artifact. Fails with
/// [`Error::FileWrite`] when the parent directory is missing or unwritable.
pub fn write_header(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::file_write(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::file_write(path, e))?;
    tmp.persist(path).map_err(|e| Error::file_write(path, e.error))?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Reads an asset, renders it, and writes the header in one step.
///
/// Returns the number of bytes embedded. The transformation is
/// deterministic: re-running with the same input overwrites the output with
/// byte-identical content.
pub fn pack_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &HeaderConfig,
) -> Result<usize> {
    let asset = Asset::read(input)?;
    let content = HeaderRenderer::with_config(config.clone()).render(asset.as_bytes());
    write_header(output, &content)?;
    Ok(asset.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn fire_app_renderer() -> HeaderRenderer {
        HeaderRenderer::with_config(HeaderConfig::new().namespace("fire_app"))
    }

    #[test]
    fn test_render_exact_template() {
        let header = fire_app_renderer().render(&[0xDE, 0xAD, 0xBE, 0xEF]);

        let expected = "#pragma once\n\
                        \n\
                        #include <cstddef>  // for std::size_t\n\
                        \n\
                        namespace fire_app {\n\
                        \n\
                        constexpr unsigned char data[] = {0xDE, 0xAD, 0xBE, 0xEF};\n\
                        \n\
                        constexpr std::size_t size = sizeof(data);\n\
                        \n\
                        }  // namespace fire_app\n";

        assert_eq!(header, expected);
    }

    #[test]
    fn test_render_empty_input() {
        let header = fire_app_renderer().render(&[]);
        assert!(header.contains("constexpr unsigned char data[] = {};"));
        assert!(header.contains("constexpr std::size_t size = sizeof(data);"));
    }

    #[test]
    fn test_render_single_byte_padding() {
        let renderer = fire_app_renderer();
        assert!(renderer.render(&[0x00]).contains("data[] = {0x00};"));
        assert!(renderer.render(&[0xFF]).contains("data[] = {0xFF};"));
    }

    #[test]
    fn test_render_deterministic() {
        let renderer = fire_app_renderer();
        let data: Vec<u8> = (0..=255).cycle().take(4096).collect();
        assert_eq!(renderer.render(&data), renderer.render(&data));
    }

    #[test]
    fn test_render_large_input_literal_count() {
        // Multi-kilobyte input: one literal per byte, no truncation
        let data: Vec<u8> = (0..=255).cycle().take(16 * 1024).collect();
        let header = fire_app_renderer().render(&data);
        assert_eq!(header.matches("0x").count(), data.len());
    }

    #[test]
    fn test_render_custom_identifiers() {
        let renderer = HeaderRenderer::with_config(
            HeaderConfig::new()
                .namespace("icons")
                .array_name("bytes")
                .size_name("byte_count"),
        );
        let header = renderer.render(&[0x01]);

        assert!(header.contains("namespace icons {"));
        assert!(header.contains("constexpr unsigned char bytes[] = {0x01};"));
        assert!(header.contains("constexpr std::size_t byte_count = sizeof(bytes);"));
        assert!(header.ends_with("}  // namespace icons\n"));
    }

    #[test]
    fn test_write_header_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fire.hpp");

        write_header(&path, "first").unwrap();
        write_header(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_header_missing_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("fire.hpp");

        let err = write_header(&path, "content").unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_pack_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("fire.bin");
        let output = dir.path().join("fire.hpp");

        let original: Vec<u8> = vec![0x00, 0x10, 0x7F, 0xFF];
        std::fs::write(&input, &original).unwrap();

        let count = pack_file(&input, &output, &HeaderConfig::new().namespace("fire")).unwrap();
        assert_eq!(count, original.len());

        // Decode the literal list back into bytes
        let header = std::fs::read_to_string(&output).unwrap();
        let list = header
            .split("data[] = {")
            .nth(1)
            .and_then(|rest| rest.split("};").next())
            .unwrap();
        let decoded: Vec<u8> = list
            .split(", ")
            .map(|lit| u8::from_str_radix(lit.trim_start_matches("0x"), 16).unwrap())
            .collect();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_pack_file_missing_input_leaves_output_untouched() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("fire.hpp");
        std::fs::write(&output, "previous artifact").unwrap();

        let err = pack_file(
            dir.path().join("missing.bin"),
            &output,
            &HeaderConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::FileRead { .. }));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "previous artifact"
        );
    }
}
