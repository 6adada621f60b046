//! kq - a tiny launcher and packager for local HTML apps
//!
//! kq provides:
//! - `run`: open a local HTML file in a native webview window
//! - `pack`: bundle files/directories into a `.kq` JSON descriptor
//! - `version`: print the version

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
