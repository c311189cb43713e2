//! Listing crawler main entry point
//!
//! This is the command-line interface for the paginated listings crawler.

use anyhow::Context;
use clap::Parser;
use listing_crawler::config::{load_config_with_hash, validate, Config};
use listing_crawler::crawler::crawl;
use listing_crawler::output::print_outcome;
use listing_crawler::Termination;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Listing crawler: scrape a paginated listings site into CSV
///
/// Starting from a single seed results page, the crawler follows detail and
/// next-page links, extracts one record per listing and appends it to a CSV
/// file. It stops once no new pages have turned up for a while.
#[derive(Parser, Debug)]
#[command(name = "listing-crawler")]
#[command(version)]
#[command(about = "Scrape a paginated listings site into CSV", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,

    /// Override the configured seed URL
    #[arg(long, value_name = "URL")]
    seed: Option<String>,

    /// Override the configured CSV output path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    if apply_overrides(&mut config, cli.seed, cli.output) {
        validate(&config).context("Invalid command-line override")?;
    }

    if cli.dry_run {
        print_dry_run(&config);
        return Ok(ExitCode::SUCCESS);
    }

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping after the current page");
            on_signal.cancel();
        }
    });

    let outcome = crawl(&config, cancel).await.context("Crawl failed")?;

    if !cli.quiet {
        println!();
        print_outcome(&outcome);
    }

    Ok(match outcome.termination {
        Termination::Quiescent => ExitCode::SUCCESS,
        Termination::Cancelled => ExitCode::from(2),
    })
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "listing_crawler=info,warn",
            1 => "listing_crawler=debug,info",
            2 => "listing_crawler=trace,debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies `--seed` / `--output`; returns true if anything changed
fn apply_overrides(config: &mut Config, seed: Option<String>, output: Option<PathBuf>) -> bool {
    let mut changed = false;

    if let Some(seed) = seed {
        tracing::info!("Seed URL overridden: {}", seed);
        config.crawler.seed_url = seed;
        changed = true;
    }

    if let Some(output) = output {
        config.output.csv_path = output.display().to_string();
        changed = true;
    }

    changed
}

/// Handles the --dry-run mode: shows what would be crawled
fn print_dry_run(config: &Config) {
    println!("=== Listing Crawler Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!(
        "  Base URL: {}",
        config.crawler.base_url.as_deref().unwrap_or("(seed origin)")
    );
    println!("  Queue capacity: {}", config.crawler.queue_capacity);
    println!("  Poll interval: {}ms", config.crawler.poll_interval);
    println!("  Idle threshold: {} polls", config.crawler.idle_threshold);
    println!("  Request timeout: {}s", config.crawler.request_timeout);

    println!("\nUser Agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);
    println!("  Header row: {}", config.output.write_header);

    println!("\nSelectors:");
    for (name, selector) in config.selectors.entries() {
        println!("  {}: {}", name, selector);
    }

    if config.districts.is_empty() {
        println!("\nDistricts: built-in table");
    } else {
        println!("\nDistricts: {} configured phrases", config.districts.len());
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would stop after {:?} without new pages",
        config.crawler.idle_timeout()
    );
}
