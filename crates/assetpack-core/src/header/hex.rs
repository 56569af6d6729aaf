//! Byte-to-hex-literal rendering.
//!
//! Every byte renders as `0x` followed by exactly two uppercase hexadecimal
//! digits, and literals are joined with `", "` in input order. The order is
//! semantically significant: the literal list reconstructs the original byte
//! stream when compiled.

use std::fmt::Write as _;

/// Separator between adjacent byte literals
pub const LITERAL_SEPARATOR: &str = ", ";

/// Renders a single byte as an uppercase, zero-padded hex literal
pub fn render_byte(byte: u8) -> String {
    format!("0x{:02X}", byte)
}

/// Renders a byte sequence as a comma-separated list of hex literals.
///
/// An empty input renders as the empty string.
pub fn render_bytes(data: &[u8]) -> String {
    // "0xNN" plus separator per byte
    let mut out = String::with_capacity(data.len() * 6);

    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            out.push_str(LITERAL_SEPARATOR);
        }
        // Writing to a String cannot fail
        let _ = write!(out, "0x{:02X}", byte);
    }

    out
}
