//! assetpack - Embed binary assets into C++ headers
//!
//! This tool reads a file's raw bytes and generates a header that exposes
//! them as a namespaced `constexpr unsigned char` array, so assets (images,
//! sounds, fonts) can be compiled into a binary instead of loaded from disk.

use anyhow::{bail, Context, Result};
use assetpack_core::{infer_output_path, namespace_for, pack_file, HeaderConfig};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn, Level};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Embed binary assets (images, sounds, fonts) into C++ headers
#[derive(Parser, Debug)]
#[command(name = "assetpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file path (when --input is not used)
    path: Option<PathBuf>,

    /// Explicit input file path
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output header path (defaults to the input path with an .hpp extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pack every regular file under this directory into sibling headers
    #[arg(
        short,
        long,
        conflicts_with_all = ["path", "input", "output", "namespace"]
    )]
    directory: Option<PathBuf>,

    /// Namespace for the generated header (defaults to the output file stem)
    #[arg(short, long)]
    namespace: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    // Dispatch based on input mode
    if let Some(ref directory) = cli.directory {
        pack_directory(directory)
    } else if let Some(input) = cli.input.as_deref().or(cli.path.as_deref()) {
        pack_single(&cli, input)
    } else {
        bail!("Missing input file: pass a path, --input, or --directory")
    }
}

/// Pack a single input file into one header
fn pack_single(cli: &Cli, input: &Path) -> Result<()> {
    if !input.exists() {
        bail!("Input file does not exist: {}", input.display());
    }
    if !input.is_file() {
        bail!("Input path is not a file: {}", input.display());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| infer_output_path(input));
    debug!("Output header: {}", output.display());

    let namespace = match cli.namespace {
        Some(ref ns) => ns.clone(),
        None => namespace_for(&output)
            .with_context(|| format!("Failed to derive namespace for: {}", output.display()))?,
    };
    debug!("Namespace: {}", namespace);

    let config = HeaderConfig::new().namespace(namespace);
    let embedded = pack_file(input, &output, &config)
        .with_context(|| format!("Failed to pack: {}", input.display()))?;

    println!("Wrote {} ({} bytes embedded)", output.display(), embedded);
    Ok(())
}

/// Pack every regular file under a directory into a sibling header
fn pack_directory(directory: &Path) -> Result<()> {
    if !directory.exists() {
        bail!("Directory does not exist: {}", directory.display());
    }
    if !directory.is_dir() {
        bail!("Path is not a directory: {}", directory.display());
    }

    info!("Packing directory: {}", directory.display());

    let mut packed = 0;
    let mut failed = 0;

    // Walk the directory
    for entry in WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        // Skip hidden files
        if path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(false)
        {
            continue;
        }

        // Skip previously generated headers
        if path.extension().and_then(|e| e.to_str()) == Some("hpp") {
            trace!("Skipping generated header: {}", path.display());
            continue;
        }

        debug!("Packing asset: {}", path.display());
        match pack_asset(path) {
            Ok((output, embedded)) => {
                println!("Wrote {} ({} bytes embedded)", output.display(), embedded);
                packed += 1;
            }
            Err(e) => {
                // Log error but continue with other files
                warn!("Error packing {}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    info!("Packed {} assets ({} failed)", packed, failed);

    if packed == 0 && failed > 0 {
        bail!("No assets packed from {}", directory.display());
    }

    Ok(())
}

/// Pack one file using the inferred output path and namespace
fn pack_asset(input: &Path) -> Result<(PathBuf, usize)> {
    let output = infer_output_path(input);
    let namespace = namespace_for(&output)
        .with_context(|| format!("Failed to derive namespace for: {}", output.display()))?;

    let config = HeaderConfig::new().namespace(namespace);
    let embedded = pack_file(input, &output, &config)
        .with_context(|| format!("Failed to pack: {}", input.display()))?;

    Ok((output, embedded))
}
