//! `depot` — command-line console for the logistics back-office.
//!
//! One-shot CRUD, search, and dashboard commands over the back-office
//! REST API.

mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Log filter from `-v` repetition; an explicit `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "depot={level},depot_api={level},depot_core={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = config::build_client(&cli.global)?;
    let global = &cli.global;

    match cli.command {
        Command::Products { command } => commands::products::handle(&client, command, global).await,
        Command::Customers { command } => {
            commands::customers::handle(&client, command, global).await
        }
        Command::Locations { command } => {
            commands::locations::handle(&client, command, global).await
        }
        Command::Dashboard => commands::dashboard::handle(&client, global).await,
        Command::Health => commands::health::handle(&client, global).await,
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    run(cli).await.map_err(miette::Report::new)
}
