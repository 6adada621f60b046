//! Run flow - open an HTML file in the native webview
//!
//! Resolves the file, builds its file:// URL, and hands off to the webview
//! backend, which blocks until the window is closed.

use anyhow::Result;
use std::path::Path;

use crate::backends::webview;
use crate::core::model::WindowSize;
use crate::core::paths;

/// Open the given HTML file in a native window and block until it closes.
pub fn run_view(file: &Path, size: WindowSize) -> Result<()> {
    let abs = paths::resolve(file)?;
    let url = paths::file_url(&abs);
    webview::launch(&url, size)
}
