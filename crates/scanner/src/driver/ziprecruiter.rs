//! ZipRecruiter search driver.
//!
//! Each dubious term is its own search, paged from 0 until a page yields
//! zero result blocks. The search term already guarantees the match, so
//! blocks are kept as-is; deduplication by (title, organization, location)
//! collapses the heavy overlap between term searches.

use chrono::Local;
use url::Url;

use hirescan_client::extract::ziprecruiter::extract_blocks;
use hirescan_client::{CachedFetcher, ExtractContext, Fetcher};
use hirescan_core::report::{outfile_name, write_report_file};
use hirescan_core::{AppConfig, Error, Site, dedupe};

use super::ScanOutcome;
use crate::query::quote_term;

/// Candidate-search URL for one (term, location, page) triple.
pub fn page_url(term: &str, location: &str, page_num: u32) -> Result<Url, Error> {
    let search = quote_term(term);
    let page = page_num.to_string();
    Url::parse_with_params(
        "https://www.ziprecruiter.com/candidate/search",
        &[("search", search.as_str()), ("location", location), ("page", page.as_str())],
    )
    .map_err(|e| Error::InvalidUrl(e.to_string()))
}

/// Scan every (location × term) pair and write one report file.
pub async fn run<F: Fetcher>(fetcher: &CachedFetcher<F>, config: &AppConfig) -> Result<ScanOutcome, Error> {
    let started = Local::now();
    let report_path = config.output_dir.join(outfile_name(Site::ZipRecruiter, started));
    tracing::info!(path = %report_path.display(), "will write output to");

    let mut all_jobs = Vec::new();

    for location in &config.ziprecruiter_locations {
        for term in &config.dubious_terms {
            let mut page_num = 0u32;
            loop {
                let url = page_url(term, location, page_num)?;
                tracing::info!(%url, "getting");

                let page = fetcher.get_fresh(url.as_str()).await?;
                let ctx = ExtractContext {
                    source_url: url.to_string(),
                    search_term: term.clone(),
                    location_term: location.clone(),
                };
                let blocks = extract_blocks(&String::from_utf8_lossy(&page), &ctx);
                tracing::info!(jobs = blocks.len(), "found jobs");

                if blocks.is_empty() {
                    tracing::info!("no more jobs found, moving on");
                    break;
                }

                all_jobs.extend(blocks);

                tokio::time::sleep(config.page_delay()).await;
                page_num += 1;
            }
        }
    }

    let flagged = all_jobs.len();
    tracing::info!(total = flagged, "all jobs collected");

    let deduped = dedupe(all_jobs);
    tracing::info!(deduped = deduped.len(), "after dedup");

    let rows_written = write_report_file(&report_path, Site::ZipRecruiter, &deduped, started)?;

    Ok(ScanOutcome { processed: flagged, flagged, rows_written, report_path })
}
