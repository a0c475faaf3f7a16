use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tome_client::{CsvTableWriter, DEFAULT_OUTPUT, ListingExtractor, ReqwestFetcher};
use tome_core::traits::TableWriter;
use tome_core::{
    CatalogCollector, CatalogPages, CatalogSite, CollectorConfig, DEFAULT_CATALOG_BASE,
    TracingCollectorReporter,
};

/// Scrape every page of the book catalog and save it as CSV.
///
/// With no arguments, runs one full scrape against the default site and
/// writes `books_data.csv` in the current directory.
#[derive(Parser)]
#[command(name = "tome", version, about = "Paginated book catalog scraper")]
struct Cli {
    /// Catalog root; pages are fetched from `<base>page-N.html`
    #[arg(long, env = "TOME_BASE_URL", default_value = DEFAULT_CATALOG_BASE)]
    base_url: String,

    /// Output CSV path
    #[arg(short, long, env = "TOME_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Pause between pages, in milliseconds
    #[arg(long, env = "TOME_DELAY_MS", default_value_t = 1000)]
    delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, env = "TOME_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tome=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let site = CatalogSite::new(&cli.base_url).map_err(|e| anyhow::anyhow!(e))?;

    let fetcher = ReqwestFetcher::with_timeout(Duration::from_secs(cli.timeout_secs))
        .context("Failed to create HTTP client")?;
    let extractor = ListingExtractor::new(site.clone()).map_err(|e| anyhow::anyhow!(e))?;
    let collector = CatalogCollector::new(
        CatalogPages::new(fetcher, site),
        extractor,
        CollectorConfig::new(Duration::from_millis(cli.delay_ms)),
    );

    tracing::info!(base_url = %cli.base_url, "Starting catalog scrape");
    let catalog = collector.collect(&TracingCollectorReporter).await;

    println!("Scraped {} books.", catalog.len());

    let writer = CsvTableWriter::new(&cli.output);
    writer
        .write(&catalog)
        .with_context(|| format!("Failed to save catalog to {}", cli.output.display()))?;

    println!("Data saved to '{}'.", writer.path().display());

    Ok(())
}
