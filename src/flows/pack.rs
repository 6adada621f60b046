//! Packing flow - bundle files and directories into a `.kq` descriptor
//!
//! Pipeline: resolve roots -> collect sources -> resolve entry -> assemble
//! config -> serialize -> preview or write.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use walkdir::WalkDir;

use crate::core::error::KqError;
use crate::core::model::{Config, DEFAULT_NAME, WindowSize};
use crate::core::paths;

/// Options for the pack command
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Files or directories to bundle
    pub paths: Vec<PathBuf>,
    /// Window size recorded in the descriptor
    pub size: WindowSize,
    /// Entry file name or path
    pub entry: String,
    /// Output file for the descriptor
    pub output: PathBuf,
    /// Print the descriptor to stdout instead of writing a file
    pub preview: bool,
    /// Emit compact JSON
    pub minify: bool,
}

/// Collect every regular file under the given roots, in input order.
///
/// File roots are appended directly; directory roots are walked depth-first
/// in directory-listing order (unsorted, symlinks not followed). Duplicates
/// are kept. Any stat or traversal failure aborts the whole collection.
pub fn collect_sources(roots: &[PathBuf]) -> Result<Vec<PathBuf>, KqError> {
    let mut sources = Vec::new();

    for root in roots {
        let meta = fs::metadata(root).map_err(|source| KqError::Collect {
            path: root.clone(),
            source,
        })?;

        if meta.is_dir() {
            for entry in WalkDir::new(root) {
                let entry = entry.map_err(|source| KqError::Collect {
                    path: root.clone(),
                    source: source.into(),
                })?;
                if entry.file_type().is_file() {
                    sources.push(entry.into_path());
                }
            }
        } else {
            sources.push(root.clone());
        }
    }

    Ok(sources)
}

/// Resolve the entry against the collected sources.
///
/// A value containing the platform path separator is resolved to its
/// canonical absolute form and must match a source exactly. A bare filename
/// matches source basenames case-insensitively, first match wins.
pub fn resolve_entry(entry: &str, sources: &[PathBuf]) -> Result<PathBuf, KqError> {
    if entry.contains(MAIN_SEPARATOR) {
        let abs = match paths::resolve(Path::new(entry)) {
            Ok(abs) => abs,
            Err(_) => {
                return Err(KqError::EntryNotFound {
                    entry: entry.to_string(),
                })
            }
        };
        if let Some(src) = sources.iter().find(|src| **src == abs) {
            return Ok(src.clone());
        }
        Err(KqError::EntryNotFound {
            entry: abs.display().to_string(),
        })
    } else {
        let wanted = entry.to_lowercase();
        sources
            .iter()
            .find(|src| {
                src.file_name()
                    .map(|name| name.to_string_lossy().to_lowercase() == wanted)
                    .unwrap_or(false)
            })
            .cloned()
            .ok_or_else(|| KqError::EntryNotFound {
                entry: entry.to_string(),
            })
    }
}

/// Build the descriptor for the given options without emitting anything.
pub fn build_config(opts: &PackOptions) -> Result<Config, KqError> {
    let mut roots = Vec::with_capacity(opts.paths.len());
    for path in &opts.paths {
        roots.push(paths::resolve(path)?);
    }

    // Application name comes from the base name of the first root.
    let name = roots
        .first()
        .and_then(|root| root.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    let sources = collect_sources(&roots)?;
    let entry = resolve_entry(&opts.entry, &sources)?;

    let source_list = sources
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();

    Ok(Config::assemble(
        name,
        entry.to_string_lossy().into_owned(),
        source_list,
        opts.size,
    ))
}

/// Run the pack command
pub fn run_pack(opts: &PackOptions, quiet: bool, verbose: bool) -> Result<()> {
    if verbose {
        for path in &opts.paths {
            eprintln!("packing {}", path.display());
        }
    }

    let config = build_config(opts)?;
    if verbose {
        eprintln!("collected {} source file(s)", config.source.len());
    }

    let json = config.to_json(opts.minify)?;

    if opts.preview {
        println!("{}", json);
    } else {
        fs::write(&opts.output, &json)
            .with_context(|| format!("failed to write to file '{}'", opts.output.display()))?;
        if !quiet {
            println!("Configuration file written to '{}'", opts.output.display());
        }
    }

    Ok(())
}
