//! Docs-Survey main entry point
//!
//! This is the command-line interface for the Docs-Survey documentation crawler.

use anyhow::Context;
use clap::Parser;
use docs_survey::config::{load_config_with_hash, Config};
use docs_survey::crawler::{crawl, user_agent_string};
use docs_survey::output::{log_statistics, write_report, ReportStatistics};
use docs_survey::seeds::{canonical_seeds, load_seeds};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Docs-Survey: a documentation site surveyor
///
/// Docs-Survey crawls a documentation site from a list of seed pages,
/// follows navigation links within one domain, and writes a CSV report of
/// each page's title and last-updated date.
#[derive(Parser, Debug)]
#[command(name = "docs-survey")]
#[command(version)]
#[command(about = "A documentation site surveyor", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Seed URL file, overriding `input.seeds-path`
    #[arg(long, value_name = "FILE")]
    seeds: Option<PathBuf>,

    /// CSV destination, overriding `output.csv-path` ("-" for stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and seeds and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if let Some(seeds) = &cli.seeds {
        config.input.seeds_path = seeds.display().to_string();
    }
    if let Some(output) = cli.output {
        config.output.csv_path = output;
    }

    let seeds = load_seeds(Path::new(&config.input.seeds_path))?;

    if cli.dry_run {
        handle_dry_run(&config, &seeds);
        return Ok(());
    }

    handle_crawl(&config, &seeds).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so a CSV report on stdout stays clean.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docs_survey=info,warn"),
            1 => EnvFilter::new("docs_survey=debug,info"),
            2 => EnvFilter::new("docs_survey=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration and seeds
fn handle_dry_run(config: &Config, seeds: &[String]) {
    let canonical = canonical_seeds(seeds);

    println!("=== Docs-Survey Dry Run ===\n");

    println!("Crawler Configuration:");
    match &config.crawler.allowed_domain {
        Some(domain) => println!("  Allowed domain: {}", domain),
        None => println!(
            "  Allowed domain: {} (first seed)",
            canonical
                .first()
                .and_then(|seed| seed.host_str())
                .unwrap_or("<none>")
        ),
    }
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);
    println!("  Connect timeout: {}s", config.crawler.connect_timeout_secs);

    println!("\nUser Agent: {}", user_agent_string(&config.user_agent));

    println!("\nOutput: {}", config.output.csv_path);

    println!("\nSeeds ({} of {} valid):", canonical.len(), seeds.len());
    for seed in &canonical {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling with {} seed URLs", canonical.len());
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config, seeds: &[String]) -> anyhow::Result<()> {
    tracing::info!("Total seed URLs: {}", seeds.len());

    let results = crawl(config, seeds).await.context("crawl failed")?;

    log_statistics(&ReportStatistics::from_results(&results));

    write_report(&results, &config.output)
        .with_context(|| format!("failed to write report to {}", config.output.csv_path))?;

    tracing::info!("Crawl completed successfully");
    Ok(())
}
