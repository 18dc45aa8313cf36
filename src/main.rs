//! Serp-Velocity command-line entry point
//!
//! Tracks keyword ranks against a JSON snapshot, mines keyword candidates and
//! runs one-off results page analyses.

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serp_velocity::analysis::{analyze_brand_mentions, run_audit};
use serp_velocity::config::{load_config_with_hash, Config};
use serp_velocity::fetch::SearchEndpoints;
use serp_velocity::output::{
    print_report, write_audit_report, write_batch_report, write_brand_summary,
    write_mining_report, write_search_results,
};
use serp_velocity::scrape::scrape_results;
use serp_velocity::store::{JsonFileStore, KeywordStore};
use serp_velocity::{AutocompleteMiner, BatchOrchestrator, HttpFetcher};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Serp-Velocity: a search rank tracker
///
/// Scrapes results pages to find where tracked domains rank, records a
/// bounded daily history with rank velocity, and mines new keywords from
/// autocomplete.
#[derive(Parser, Debug)]
#[command(name = "serp-velocity")]
#[command(version)]
#[command(about = "A search rank tracker and keyword miner", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Update ranks for every keyword in a snapshot file
    Track {
        /// JSON snapshot of tracked keywords
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Run the batch but do not write updates back
        #[arg(long)]
        dry_run: bool,
    },

    /// Mine autocomplete suggestions for a seed keyword
    Mine {
        seed: String,
    },

    /// Show the parsed organic results for a query
    Serp {
        query: String,

        /// Number of results to request (defaults to the tracking depth)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=100))]
        depth: Option<u64>,
    },

    /// Measure how often a brand appears on a results page
    Brand {
        keyword: String,

        #[arg(long)]
        brand: String,

        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=100))]
        depth: Option<u64>,
    },

    /// Audit a page for a keyword, optionally against a competitor page
    Audit {
        url: String,

        #[arg(long)]
        keyword: String,

        #[arg(long)]
        competitor: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Track { snapshot, dry_run } => {
            handle_track(&config, &snapshot, dry_run, cli.json).await
        }
        Command::Mine { seed } => handle_mine(&config, &seed, cli.json).await,
        Command::Serp { query, depth } => handle_serp(&config, &query, depth, cli.json).await,
        Command::Brand {
            keyword,
            brand,
            depth,
        } => handle_brand(&config, &keyword, &brand, depth, cli.json).await,
        Command::Audit {
            url,
            keyword,
            competitor,
        } => handle_audit(&config, &url, &keyword, competitor.as_deref(), cli.json).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("serp_velocity=info,warn"),
            1 => EnvFilter::new("serp_velocity=debug,info"),
            2 => EnvFilter::new("serp_velocity=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // stdout carries only reports
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn load_or_default(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

fn build_fetcher(config: &Config) -> anyhow::Result<HttpFetcher> {
    HttpFetcher::new(&config.http).context("Failed to build HTTP client")
}

fn resolve_depth(config: &Config, depth: Option<u64>) -> usize {
    depth.map_or(config.tracking.fetch_depth, |d| d as usize)
}

async fn handle_track(
    config: &Config,
    snapshot: &Path,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut store = JsonFileStore::new(snapshot);
    let records = store
        .load()
        .with_context(|| format!("Failed to read snapshot {}", snapshot.display()))?;

    let orchestrator = BatchOrchestrator::from_config(build_fetcher(config)?, config)
        .context("Invalid tracking configuration")?;
    let report = orchestrator.run(&records, Utc::now()).await;

    if dry_run {
        tracing::info!("Dry run: {} updates not written back", report.updates.len());
    } else {
        store
            .write_back(&report.updates)
            .with_context(|| format!("Failed to write snapshot {}", snapshot.display()))?;
    }

    print_report(&report, json, |out, report| write_batch_report(out, report))?;
    Ok(())
}

async fn handle_mine(config: &Config, seed: &str, json: bool) -> anyhow::Result<()> {
    let miner = AutocompleteMiner::from_config(build_fetcher(config)?, config)
        .context("Invalid mining configuration")?;
    let report = miner.mine_report(seed).await;

    print_report(&report, json, |out, report| write_mining_report(out, report))?;
    Ok(())
}

async fn handle_serp(
    config: &Config,
    query: &str,
    depth: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;
    let endpoints =
        SearchEndpoints::new(&config.search).context("Invalid search endpoint in configuration")?;

    let results = scrape_results(
        &fetcher,
        &endpoints,
        query,
        resolve_depth(config, depth),
        config.http.request_timeout(),
    )
    .await
    .with_context(|| format!("Failed to fetch results for '{}'", query))?;

    print_report(&results, json, |out, results| {
        write_search_results(out, query, results)
    })?;
    Ok(())
}

async fn handle_brand(
    config: &Config,
    keyword: &str,
    brand: &str,
    depth: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;
    let endpoints =
        SearchEndpoints::new(&config.search).context("Invalid search endpoint in configuration")?;

    // A blocked page still yields a summary, with Unknown sentiment
    let results = match scrape_results(
        &fetcher,
        &endpoints,
        keyword,
        resolve_depth(config, depth),
        config.http.request_timeout(),
    )
    .await
    {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!("Results page unavailable for '{}': {}", keyword, e);
            Vec::new()
        }
    };

    let summary = analyze_brand_mentions(&results, brand);
    print_report(&summary, json, |out, summary| {
        write_brand_summary(out, brand, summary)
    })?;
    Ok(())
}

async fn handle_audit(
    config: &Config,
    url: &str,
    keyword: &str,
    competitor: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;

    let report = run_audit(
        &fetcher,
        url,
        competitor,
        keyword,
        config.http.request_timeout(),
    )
    .await
    .context("Audit failed")?;

    print_report(&report, json, |out, report| write_audit_report(out, report))?;
    Ok(())
}
