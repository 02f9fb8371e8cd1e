//! Kiln - A small terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! kiln notes.txt
//! kiln --quit-times 1 notes.txt
//! kiln --log-file kiln.log notes.txt
//! kiln --keys
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use kiln::app::App;
use kiln::config::{EditorOptions, LOG_ENV, resolve_log_path};

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "kiln", version, about, long_about = None)]
struct Cli {
    /// File to edit; starts with an unnamed buffer when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Append log output to this file (defaults to $KILN_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Ctrl-Q presses needed to quit with unsaved changes
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=9))]
    quit_times: Option<u8>,

    /// Seconds a status message stays visible
    #[arg(long, value_name = "SECS")]
    message_timeout: Option<u64>,

    /// Print decoded keys instead of editing (press q to stop)
    #[arg(long)]
    keys: bool,
}

/// The screen belongs to the editor, so logs go to a file or nowhere.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    match path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = resolve_log_path(cli.log_file.clone(), std::env::var_os(LOG_ENV));
    init_logging(log_path.as_deref())?;

    let options = EditorOptions::from_flags(cli.quit_times, cli.message_timeout);
    tracing::info!(?options, file = ?cli.file, "starting");

    let app = App::new(cli.file).with_options(options);
    if cli.keys {
        return app.run_key_echo().context("Key echo failed");
    }
    app.run().context("Application error")
}
