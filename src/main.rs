//! hreflang-sitemaps main entry point
//!
//! This is the command-line interface for the hreflang sitemap generator.

use anyhow::{bail, Context};
use clap::Parser;
use hreflang_sitemaps::config::load_config_with_hash;
use hreflang_sitemaps::generator::LogProgress;
use hreflang_sitemaps::output::{print_report, FsArtifactSink};
use hreflang_sitemaps::Generator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// hreflang-sitemaps: localized XML sitemaps with hreflang alternates
///
/// Reads a homepage dataset (one row per locale) and a crawl export, maps
/// every indexable page onto its locale and writes one sitemap per locale,
/// gzipped and raw, plus a CSV audit of every alternate link.
#[derive(Parser, Debug)]
#[command(name = "hreflang-sitemaps")]
#[command(version = "1.0.0")]
#[command(about = "Generates hreflang-annotated sitemaps per locale", long_about = None)]
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

    /// Date used in output file names (YYYYMMDD), defaults to today
    #[arg(long, value_name = "YYYYMMDD")]
    date: Option<String>,

    /// Read inputs and build every sitemap without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    let date = match cli.date {
        Some(date) => parse_date(&date)?,
        None => chrono::Local::now().format("%Y%m%d").to_string(),
    };

    let sink = FsArtifactSink::new(&config.output);
    let generator = Generator::new(config, config_hash, date);
    tracing::info!(
        "Generating sitemaps for {} dated {}",
        generator.config().site.domain,
        generator.date()
    );

    let report = generator
        .run(&sink, &mut LogProgress, cli.dry_run)
        .context("Sitemap generation failed")?;

    if !cli.quiet {
        print_report(&report);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("hreflang_sitemaps=info,warn"),
            1 => EnvFilter::new("hreflang_sitemaps=debug,info"),
            2 => EnvFilter::new("hreflang_sitemaps=trace,debug"),
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

/// Checks a `--date` value and returns it unchanged
fn parse_date(value: &str) -> anyhow::Result<String> {
    if value.len() != 8 {
        bail!("--date must be YYYYMMDD, got '{}'", value);
    }
    chrono::NaiveDate::parse_from_str(value, "%Y%m%d")
        .with_context(|| format!("--date '{}' is not a valid date", value))?;
    Ok(value.to_string())
}
