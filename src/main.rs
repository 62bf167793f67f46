//! scrib - a tiny gap-buffer text editor for the terminal.
//!
//! # Usage
//!
//! ```bash
//! scrib notes.txt
//! scrib            # start with an unnamed empty document
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scrib::app::App;
use scrib::buffer::DEFAULT_CAPACITY;

/// A tiny gap-buffer text editor for the terminal
#[derive(Parser, Debug)]
#[command(name = "scrib", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Storage capacity in bytes; the document can never grow past it
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app = App::new(cli.file).with_capacity(cli.capacity);
    app.run().context("Application error")
}
