//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::model::WindowSize;
use crate::flows::pack::PackOptions;

/// kq - open local HTML apps in a native window, or pack them for later.
#[derive(Parser, Debug)]
#[command(name = "kq")]
#[command(
    author,
    version,
    about,
    long_about = r#"kq is a thin wrapper around the native OS webview.

`run` opens a single HTML file in a window and blocks until it is closed.
`pack` bundles files and directories into a `.kq` JSON descriptor that an
external loader can consume.

Examples:
    kq run index.html
    kq run demo.html --size 1280x720
    kq pack ./site --entry main.html --output app.kq
    kq pack a.html assets --preview --minify
"#
)]
pub struct Cli {
    /// Quiet mode (suppress non-essential output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress non-essential output such as the confirmation message\n\
printed after writing a descriptor file. Errors are still printed to stderr."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Print per-path collection diagnostics to stderr while packing.\n\
Intended for debugging bundle contents."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the viewer with the specified HTML file.
    #[command(
        long_about = "Open the specified HTML file in a native webview window.\n\n\
The window blocks the calling process until it is closed.\n\n\
Examples:\n\
  kq run index.html\n\
  kq run demo.html --size 1280x720\n"
    )]
    Run {
        /// HTML file to display.
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Window size in WIDTHxHEIGHT format.
        #[arg(
            long,
            default_value = "900x600",
            value_name = "WIDTHxHEIGHT",
            long_help = "Window size in WIDTHxHEIGHT format (e.g. 1280x720).\n\n\
Dimensions are not range-checked; they are handed to the OS webview as-is."
        )]
        size: String,
    },

    /// Generate a JSON descriptor file from the specified paths.
    #[command(
        long_about = "Generate a `.kq` JSON descriptor from the specified files or\n\
directories. Directories are walked recursively and every regular file found\n\
becomes a source entry, in discovery order.\n\n\
The entry file must resolve to one of the collected sources: pass a path to\n\
require that exact file, or a bare filename to match case-insensitively\n\
against source basenames (default: index.html).\n\n\
Examples:\n\
  kq pack ./site\n\
  kq pack ./site --entry main.html --output app.kq\n\
  kq pack a.html b.html assets --size 1024x768 --preview\n"
    )]
    Pack {
        /// Files or directories to bundle.
        #[arg(value_name = "PATH", num_args = 1.., required = true)]
        paths: Vec<PathBuf>,

        /// Window size in WIDTHxHEIGHT format.
        #[arg(short, long, default_value = "800x600", value_name = "WIDTHxHEIGHT")]
        size: String,

        /// Entry point file (default is index.html).
        #[arg(
            short,
            long,
            value_name = "ENTRY",
            long_help = "Entry point file.\n\n\
A value containing a path separator is resolved and must match one of the\n\
collected sources exactly. A bare filename is matched case-insensitively\n\
against source basenames, first match wins. Defaults to index.html."
        )]
        entry: Option<String>,

        /// Output file name.
        #[arg(short, long, default_value = "a.kq", value_name = "FILE")]
        output: PathBuf,

        /// Preview JSON on stdout without saving to a file.
        #[arg(short, long)]
        preview: bool,

        /// Minify the JSON output.
        #[arg(short, long)]
        minify: bool,
    },

    /// Print the kq version.
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { file, size } => {
            let size: WindowSize = size.parse()?;
            crate::flows::run::run_view(&file, size)
        }

        Commands::Pack {
            paths,
            size,
            entry,
            output,
            preview,
            minify,
        } => {
            let opts = PackOptions {
                paths,
                size: size.parse()?,
                entry: entry.unwrap_or_else(|| "index.html".to_string()),
                output,
                preview,
                minify,
            };
            crate::flows::pack::run_pack(&opts, cli.quiet, cli.verbose)
        }

        Commands::Version => {
            println!("kq {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
