//! Command-line entry point, meant to be triggered by cron or CI.
//!
//! - `run` (default): one watch pass; prints the outcome as a JSON line
//! - `latest`: prints the newest document on the page without notifying or
//!   touching state; needs no credentials
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use fia_doc_watch::{
    find_latest_document_in_bytes, Config, DocumentRules, FetchConfig, HttpFetcher, PageFetcher,
    RunReport, Watcher,
};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(author, version, about = "Notifies once per newly published FIA decision document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Season listing page (overrides SEASON_URL)
    #[arg(long, global = true)]
    season_url: Option<Url>,

    /// State file holding the last notified URL (overrides LAST_SEEN_FILE)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the page once and notify if a new document appeared
    Run,

    /// Print the newest document on the page as JSON
    Latest(LatestArgs),
}

#[derive(Args, Debug)]
struct LatestArgs {
    /// Parse a saved copy of the page instead of fetching it
    #[arg(long)]
    html_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(cli.season_url, cli.state_file),
        Commands::Latest(args) => latest(cli.season_url, args),
    }
}

fn run(season_url: Option<Url>, state_file: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(url) = season_url {
        config.fetch.season_url = url;
    }
    if let Some(path) = state_file {
        config.state_path = path;
    }

    let watcher = Watcher::from_config(&config)?;
    let outcome = watcher.run()?;

    println!("{}", serde_json::to_string(&RunReport::from(outcome))?);
    Ok(())
}

fn latest(season_url: Option<Url>, args: LatestArgs) -> anyhow::Result<()> {
    let mut fetch = FetchConfig::from_env()?;
    if let Some(url) = season_url {
        fetch.season_url = url;
    }

    let bytes = match args.html_file {
        Some(path) => std::fs::read(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => HttpFetcher::new(&fetch)?.fetch_page(&fetch.season_url)?,
    };

    let latest = find_latest_document_in_bytes(&bytes, &fetch.season_url, &DocumentRules::default());
    println!("{}", serde_json::to_string(&latest)?);
    Ok(())
}
