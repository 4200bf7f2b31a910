//! Bingwall main entry point

use bingwall::config::load_config_with_hash;
use bingwall::harvest::Coordinator;
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

/// Bingwall: incremental wallpaper catalog harvester
///
/// Walks the site's list API page by page, enriches each new item from its
/// detail page and download API, and stores every item exactly once. Stops
/// as soon as it reaches territory harvested on a previous run.
#[derive(Parser, Debug)]
#[command(name = "bingwall")]
#[command(version)]
#[command(about = "Incremental wallpaper catalog harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Override the configured page budget
    #[arg(long, value_name = "N")]
    pages: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show statistics from the database and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,

    /// Validate config and show what would be harvested without running
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)?;
    tracing::info!("Configuration loaded (hash: {})", config_hash);

    if let Some(pages) = cli.pages {
        anyhow::ensure!(pages >= 1, "--pages must be >= 1");
        config.crawl.max_pages = pages;
    }

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_harvest(config).await?;
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bingwall=info,warn"),
            1 => EnvFilter::new("bingwall=debug,info"),
            2 => EnvFilter::new("bingwall=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &bingwall::Config) {
    println!("=== Bingwall Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  User agent: {}", config.site.user_agent);
    println!("  Request timeout: {}s", config.site.request_timeout_secs);

    println!("\nCrawl:");
    println!("  Page budget: {}", config.crawl.max_pages);
    println!("  Category tab: {}", config.crawl.category_tab);

    println!("\nOutput:");
    println!("  Database: {}", config.output.database_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would harvest up to {} list pages from {}",
        config.crawl.max_pages, config.site.base_url
    );
}

/// Handles the --stats mode: shows statistics from the database
fn handle_stats(config: &bingwall::Config) -> anyhow::Result<()> {
    use bingwall::output::{load_statistics, print_statistics};
    use bingwall::SqliteStore;
    use std::path::Path;

    println!("Database: {}\n", config.output.database_path);

    let storage = SqliteStore::new(Path::new(&config.output.database_path))?;
    let stats = load_statistics(&storage)?;
    print_statistics(&stats);

    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(config: bingwall::Config) -> anyhow::Result<()> {
    let mut coordinator = Coordinator::new(config)?;

    // Ctrl-C stops issuing new fetches; the entry in flight completes.
    let stop = coordinator.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing current entry");
            stop.store(true, Ordering::Relaxed);
        }
    });

    let summary = coordinator.run().await?;

    println!(
        "Harvest done ({:?}): {} pages fetched, {} records inserted, {} entries skipped",
        summary.outcome, summary.pages_fetched, summary.records_inserted, summary.entries_skipped
    );

    Ok(())
}
