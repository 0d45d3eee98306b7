//! hirescan entry point.
//!
//! Runs the Craigslist and ZipRecruiter drivers back to back with a shared
//! page cache. Logging goes to stderr so reports can be piped cleanly.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use hirescan_client::{CachedFetcher, FetchClient, FetchConfig};
use hirescan_core::{AppConfig, PageCache};

mod driver;
mod query;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;

    let cache = PageCache::new(&config.cache_dir)?;
    let client = FetchClient::new(FetchConfig {
        user_agent: config.user_agent.clone(),
        max_bytes: config.max_bytes,
        timeout: config.timeout(),
        ..Default::default()
    })?;
    let fetcher = CachedFetcher::new(client, cache).ignore_cache(config.ignore_cache);

    if !config.craigslist_sites.is_empty() {
        let outcome = driver::craigslist::run(&fetcher, &config).await?;
        tracing::info!(
            processed = outcome.processed,
            flagged = outcome.flagged,
            rows = outcome.rows_written,
            report = %outcome.report_path.display(),
            "craigslist scan complete"
        );
    }

    if !config.ziprecruiter_locations.is_empty() {
        let outcome = driver::ziprecruiter::run(&fetcher, &config).await?;
        tracing::info!(
            processed = outcome.processed,
            rows = outcome.rows_written,
            report = %outcome.report_path.display(),
            "ziprecruiter scan complete"
        );
    }

    Ok(())
}
