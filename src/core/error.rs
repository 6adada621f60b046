//! Typed errors for the run and pack pipelines

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving paths, collecting sources, and packing.
///
/// Every variant is fatal to the invoking command. Rendering and the
/// process exit happen at the top-level boundary in `main`.
#[derive(Debug, Error)]
pub enum KqError {
    /// The input path does not exist.
    #[error("file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The OS failed to canonicalize an existing path.
    #[error("failed to resolve path '{}'", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A root was inaccessible or a traversal step failed.
    #[error("failed to collect source files under '{}'", .path.display())]
    Collect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The entry file is not among the collected sources.
    #[error("entry file '{entry}' does not exist in the specified paths")]
    EntryNotFound { entry: String },

    /// A window size literal did not parse.
    #[error("invalid size '{input}': must be in WIDTHxHEIGHT format")]
    InvalidSize { input: String },

    /// The descriptor could not be rendered to JSON. The schema is closed,
    /// so hitting this means an internal invariant was violated.
    #[error("failed to serialize configuration")]
    Serialize(#[from] serde_json::Error),
}
