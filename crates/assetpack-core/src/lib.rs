//! # assetpack-core
//!
//! A library for embedding binary assets into C++ headers.
//!
//! This crate provides the core functionality for:
//! - Reading an asset file's raw bytes without interpretation
//! - Rendering those bytes as a `constexpr unsigned char` array in a
//!   namespaced, pragma-guarded header
//! - Writing the generated header atomically to disk
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`asset`]: Asset loading and output-path/namespace derivation
//! - [`header`]: Hex-literal rendering, header templating, atomic writes
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use assetpack_core::{HeaderConfig, pack_file};
//!
//! let config = HeaderConfig::new().namespace("fire_app");
//! let embedded = pack_file("fire.png", "fire_app.hpp", &config)?;
//! println!("embedded {} bytes", embedded);
//! # Ok::<(), assetpack_core::Error>(())
//! ```
//!
//! The generated header exposes the bytes as `fire_app::data` along with a
//! `fire_app::size` constant computed via `sizeof`, so the declared size can
//! never drift from the embedded content.

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod asset;
pub mod error;
pub mod header;

// Re-export primary types for convenience
pub use asset::{infer_output_path, namespace_for, Asset};
pub use error::{Error, Result};
pub use header::{pack_file, write_header, HeaderConfig, HeaderRenderer};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
