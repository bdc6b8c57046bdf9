use std::path::PathBuf;

use anyhow::Context;
use bookshelf::api::BookClient;
use bookshelf::config::Config;
use bookshelf::logging::init_tracing;
use bookshelf::ui::{self, Route};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Browse and edit a REST book inventory")]
struct Cli {
    /// Override the store URL from the config file
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Screen to open first: /, /addbook, /book/{id} or /edit/{id}
    #[arg(long, value_name = "ROUTE", default_value = "/")]
    open: Route,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }?;
    let mut config = config.with_base_url(cli.base_url);
    config.validate()?;
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }

    init_tracing(&config.logging).context("Failed to initialize logging")?;
    tracing::info!(base_url = %config.api.base_url, route = %cli.open, "Starting");

    let client = BookClient::new(&config.api.base_url)?;
    ui::run(client, cli.open).context("Terminal session failed")?;
    Ok(())
}
