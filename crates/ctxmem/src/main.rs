//! ctxmem - Code Context Memory CLI
//!
//! Attach notes to lines of source files and get reminded about them when
//! you come back to a file after a while.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;
mod config;
mod database;
mod editor;
mod prompt;

use cli::{Cli, Commands};
use commands::App;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("ctxmem=info".parse()?))
        .init();

    let cli = Cli::parse();

    if matches!(cli.command, Commands::Version) {
        println!("ctxmem {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = config::Config::load()?;
    let store = database::open_store(&config)?;
    let app = App::new(store, config.resurfacing.to_policy());

    // Execute command
    match cli.command {
        Commands::Add { cursor, text } => commands::notes::add(&app, &cursor, text),
        Commands::View { cursor } => commands::notes::view(&app, &cursor),
        Commands::Delete { cursor } => commands::notes::delete(&app, &cursor),
        Commands::Open { id } => commands::notes::open(&app, &id),
        Commands::Hover { cursor } => commands::render::hover(&app, &cursor),
        Commands::Marks { file } => commands::render::marks(&app, &file),
        Commands::Status { file } => commands::render::status(&app, &file),
        Commands::Tree => commands::render::tree(&app),
        Commands::Focus { cursor } => commands::resurface::focus(&app, &cursor),
        Commands::Stale => commands::resurface::stale(&app),
        Commands::Watch { cursor, interval } => {
            commands::resurface::watch(&app, &cursor, interval).await
        }
        Commands::Version => Ok(()),
    }
}
