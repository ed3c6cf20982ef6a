//! deq CLI - file-backed double-ended queue of text items
//!
//! Parses argv into a validated `Invocation`, wires the JSON file store into
//! the queue service, runs one command, and prints the result.

mod command;
mod config;
mod dispatch;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::debug;

use command::Cli;
use deq_core::application::QueueService;
use deq_core::port::{RescanIdAllocator, SystemTimeProvider};
use deq_infra_fs::JsonFileStore;

fn main() -> Result<()> {
    logging::init()?;

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let invocation = cli.into_invocation(&cwd)?;

    debug!(
        version = deq_core::VERSION,
        path = %invocation.path.display(),
        command = ?invocation.command,
        "Dispatching"
    );

    // DI wiring
    let store = Arc::new(JsonFileStore::new(invocation.path));
    let service = QueueService::new(
        store,
        Arc::new(RescanIdAllocator),
        Arc::new(SystemTimeProvider),
    );

    let output = dispatch::dispatch(&service, invocation.command)?;
    render::print(&mut std::io::stdout().lock(), &output.lines, output.silent)
        .context("Failed to write output")?;

    Ok(())
}
