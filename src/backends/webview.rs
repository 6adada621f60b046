//! Native webview backend
//!
//! The window is an external collaborator: kq hands it a file URL and a
//! size, then blocks until the user closes it. Nothing else in the crate
//! depends on this module.

use anyhow::{anyhow, Result};
use web_view::Content;

use crate::core::model::{DEFAULT_TITLE, WindowSize};

/// Open a native webview window at the given URL and block until closed.
pub fn launch(url: &str, size: WindowSize) -> Result<()> {
    web_view::builder()
        .title(DEFAULT_TITLE)
        .content(Content::Url(url))
        .size(size.width, size.height)
        .resizable(true)
        .debug(false)
        .user_data(())
        .invoke_handler(|_webview, _arg| Ok(()))
        .build()
        .and_then(|view| view.run())
        .map_err(|e| anyhow!("failed to open webview window: {}", e))?;
    Ok(())
}
