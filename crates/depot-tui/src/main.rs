//! `depot-tui` — interactive terminal console for the logistics
//! back-office.
//!
//! Four screens driven by number keys: Dashboard, Products, Customers,
//! Locations. Each entity screen is backed by a `depot-core` controller;
//! a background bridge task streams controller snapshots and notices into
//! the action loop.
//!
//! Logging goes to a file, never to stdout or stderr, which belong to the
//! terminal UI while it is running.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use depot_api::ApiClient;

use crate::app::App;
use crate::data_bridge::Controllers;

/// Terminal console for managing logistics master data.
#[derive(Parser, Debug)]
#[command(name = "depot-tui", version, about)]
struct Cli {
    /// Back-office root URL (e.g., http://localhost:8080)
    #[arg(short = 'u', long, env = "DEPOT_API_URL")]
    api_url: Option<String>,

    /// Backend profile from the config file
    #[arg(short = 'p', long, env = "DEPOT_PROFILE")]
    profile: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "DEPOT_TIMEOUT", default_value = "30")]
    timeout: u64,

    /// Where to write the log file
    #[arg(long, default_value = "/tmp/depot-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-backed tracing. The returned guard must stay alive until exit so
/// buffered lines get flushed.
fn init_logging(log_file: &Path, verbose: u8) -> WorkerGuard {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "depot_tui={level},depot_core={level},depot_api={level}"
        ))
    });

    let dir = log_file.parent().unwrap_or(Path::new("/tmp"));
    let name = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("depot-tui.log"));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .init();

    guard
}

/// Build the API client: an explicit URL wins over the config profile.
fn build_client(cli: &Cli) -> Result<Arc<ApiClient>> {
    if let Some(ref url) = cli.api_url {
        let client = ApiClient::new(url, Duration::from_secs(cli.timeout))?;
        return Ok(Arc::new(client));
    }

    let config = depot_config::load_or_default();
    if config.profiles.is_empty() {
        return Err(eyre!(
            "no back-office URL configured — pass --api-url, set DEPOT_API_URL, \
             or add a profile to {}",
            depot_config::config_path().display()
        ));
    }
    let settings = depot_config::resolve_profile(&config, cli.profile.as_deref())?;
    let client = ApiClient::new(&settings.api_url, settings.timeout)?;
    Ok(Arc::new(client))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks first: a panic during init must still restore the terminal.
    tui::install_hooks()?;
    let _log_guard = init_logging(&cli.log_file, cli.verbose);

    info!(
        url = cli.api_url.as_deref().unwrap_or("(from config)"),
        "starting depot-tui"
    );

    let client = build_client(&cli)?;
    let controllers = Controllers::new(&client);
    App::new(controllers, client).run().await
}
