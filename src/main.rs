//! `weekly-timesheet` command line.
//!
//! `summarize` reads a JSON batch of shift records and prints the weekly
//! reports; `serve` exposes the same pipeline over HTTP.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use weekly_timesheet::api::{AppState, create_router};
use weekly_timesheet::batch::{load_shift_records, render_reports};
use weekly_timesheet::calculation::build_timesheets;
use weekly_timesheet::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "weekly-timesheet", version, about)]
struct Cli {
    /// YAML settings file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a JSON file of shift records
    Summarize {
        /// Input file
        #[arg(default_value = "data.json")]
        input: PathBuf,

        /// Write the reports here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Serve POST /timesheets
    Serve {
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
}

fn load_config(path: Option<&Path>) -> Result<ConfigLoader> {
    match path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(ConfigLoader::default()),
    }
}

fn summarize(config: &ConfigLoader, input: &Path, output: Option<&Path>) -> Result<()> {
    let records = load_shift_records(input)
        .with_context(|| format!("reading shifts from {}", input.display()))?;
    let reports = build_timesheets(&records, config.config());
    let rendered = render_reports(&reports)?;

    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing reports to {}", path.display()))?,
        None => println!("{}", rendered),
    }
    Ok(())
}

async fn serve(config: ConfigLoader, addr: SocketAddr) -> Result<()> {
    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Timesheet endpoint: http://{}/timesheets", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("weekly_timesheet=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Summarize { input, output } => summarize(&config, &input, output.as_deref()),
        Command::Serve { addr } => serve(config, addr).await,
    }
}
