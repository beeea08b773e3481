//! mkurl - interactive creator for internet shortcut files.
//!
//! Asks for a name and a URL, then writes a `.url`, `.webloc` or `.desktop`
//! file (depending on the host OS) into the current directory.

mod prompt;
mod session;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mkurl_core::ShortcutWriter;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "mkurl", version)]
#[command(about = "Create an internet shortcut in the current directory")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the dialogue
    let default_level = if args.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Line printed for an error that reached the top level.
fn failure_message(err: &anyhow::Error) -> String {
    let message = format!("{err:#}");
    if message.is_empty() {
        "Unknown error occurred.".to_string()
    } else {
        format!("Error: {message}")
    }
}

fn run() -> Result<ExitCode> {
    let writer = ShortcutWriter::for_current_platform();
    let dir = std::env::current_dir().context("Could not resolve the current directory")?;
    debug!("Platform: {}, directory: {}", writer.platform(), dir.display());

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    let status = session::run(&mut input, &mut out, &mut err, writer, &dir)?;
    Ok(ExitCode::from(status))
}
