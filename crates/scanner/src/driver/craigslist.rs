//! Craigslist search driver.
//!
//! One combined query over all dubious terms per site: the search page
//! narrows candidates, then each posting body is fetched through the cache
//! and flagged term by term. Zero-match postings are dropped.

use chrono::Local;
use url::Url;

use hirescan_client::extract::craigslist::{extract_posting, extract_search_results};
use hirescan_client::{CachedFetcher, ExtractContext, Fetcher};
use hirescan_core::report::{outfile_name, write_report_file};
use hirescan_core::{AppConfig, Error, Site, dedupe, flag_terms};

use super::ScanOutcome;
use crate::query::build_query;

/// Search results URL for one Craigslist site, newest first.
pub fn search_url(site: &str, query: &str) -> Result<Url, Error> {
    Url::parse_with_params(
        &format!("https://{site}.craigslist.org/search/jjj"),
        &[("query", query), ("sort", "date")],
    )
    .map_err(|e| Error::InvalidUrl(e.to_string()))
}

/// Scan every configured Craigslist site and write one report file.
pub async fn run<F: Fetcher>(fetcher: &CachedFetcher<F>, config: &AppConfig) -> Result<ScanOutcome, Error> {
    let started = Local::now();
    let query = build_query(&config.dubious_terms);
    let report_path = config.output_dir.join(outfile_name(Site::Craigslist, started));

    tracing::info!(%query, "search query");
    tracing::info!(path = %report_path.display(), "will write output to");

    let mut all_flagged = Vec::new();
    let mut processed_total = 0;

    for site in &config.craigslist_sites {
        let url = search_url(site, &query)?;
        let page = fetcher.get_fresh(url.as_str()).await?;
        let listings = extract_search_results(&String::from_utf8_lossy(&page));
        tracing::info!(site, results = listings.len(), "search page fetched");

        let ctx = ExtractContext {
            source_url: url.to_string(),
            search_term: query.clone(),
            location_term: site.clone(),
        };

        let mut site_flagged = 0;
        let mut site_processed = 0;

        for listing in listings.iter().take(config.max_posts_per_site) {
            let body = fetcher.get_page(&listing.url).await?;

            match extract_posting(&String::from_utf8_lossy(&body), listing, &ctx) {
                Some(mut posting) => {
                    posting.matches = flag_terms(&posting.body, &config.dubious_terms);
                    if posting.is_flagged() {
                        site_flagged += 1;
                        all_flagged.push(posting);
                    } else {
                        tracing::debug!(url = %listing.url, "did not find anything dubious");
                    }
                }
                None => tracing::debug!(url = %listing.url, "no posting body"),
            }

            site_processed += 1;
            if site_processed % 100 == 0 {
                tracing::info!(site, processed = site_processed, "progress");
            }
        }

        tracing::info!(site, flagged = site_flagged, processed = site_processed, "site done");
        processed_total += site_processed;

        tokio::time::sleep(config.site_delay()).await;
    }

    let flagged = all_flagged.len();
    let deduped = dedupe(all_flagged);
    let rows_written = write_report_file(&report_path, Site::Craigslist, &deduped, started)?;

    Ok(ScanOutcome { processed: processed_total, flagged, rows_written, report_path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use hirescan_core::PageCache;
    use std::collections::HashMap;
    use tempfile::TempDir;

    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch_bytes(&self, url: &str) -> Result<Bytes, Error> {
            self.pages
                .get(url)
                .map(|b| Bytes::from(b.clone().into_bytes()))
                .ok_or_else(|| Error::Http(format!("status 404 for {url}")))
        }
    }

    fn search_page(post_urls: &[&str]) -> String {
        let rows: String = post_urls
            .iter()
            .map(|u| {
                format!(
                    r#"<li class="result-row">
                        <time class="result-date" datetime="2020-07-06 12:30">Jul 6</time>
                        <a class="result-title" href="{u}">Warehouse Associate</a>
                    </li>"#
                )
            })
            .collect();
        format!("<html><body><ul class=\"rows\">{rows}</ul></body></html>")
    }

    fn posting_page(body: &str) -> String {
        format!("<html><body><section id=\"postingbody\">{body}</section></body></html>")
    }

    fn test_config(output_dir: &std::path::Path) -> AppConfig {
        AppConfig {
            output_dir: output_dir.to_path_buf(),
            site_delay_ms: 0,
            page_delay_ms: 0,
            craigslist_sites: vec!["chicago".to_string()],
            dubious_terms: vec!["felony".to_string(), "clean record".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_run_flags_and_writes_report() {
        let cache_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let config = test_config(out_dir.path());

        let query = build_query(&config.dubious_terms);
        let url = search_url("chicago", &query).unwrap();

        let mut pages = HashMap::new();
        pages.insert(
            url.to_string(),
            search_page(&["https://chicago.craigslist.org/1.html", "https://chicago.craigslist.org/2.html"]),
        );
        pages.insert(
            "https://chicago.craigslist.org/1.html".to_string(),
            posting_page("Applicants must have no felony convictions."),
        );
        pages.insert(
            "https://chicago.craigslist.org/2.html".to_string(),
            posting_page("Friendly retail team, weekends required."),
        );

        let fetcher = CachedFetcher::new(StubFetcher { pages }, PageCache::new(cache_dir.path()).unwrap());
        let outcome = run(&fetcher, &config).await.unwrap();

        assert_eq!(outcome.processed, 2);
        assert_eq!(outcome.flagged, 1);
        assert_eq!(outcome.rows_written, 1);
        assert!(outcome.report_path.is_file());

        let mut reader = csv::Reader::from_path(&outcome.report_path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "https://chicago.craigslist.org/1.html");
        assert_eq!(&records[0][4], "felony");
    }

    #[tokio::test]
    async fn test_run_caches_posting_pages() {
        let cache_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let config = test_config(out_dir.path());

        let query = build_query(&config.dubious_terms);
        let url = search_url("chicago", &query).unwrap();

        let mut pages = HashMap::new();
        pages.insert(url.to_string(), search_page(&["https://chicago.craigslist.org/1.html"]));
        pages.insert(
            "https://chicago.craigslist.org/1.html".to_string(),
            posting_page("no felonies please"),
        );

        let fetcher = CachedFetcher::new(StubFetcher { pages }, PageCache::new(cache_dir.path()).unwrap());
        run(&fetcher, &config).await.unwrap();

        // posting cached, search page not
        assert!(fetcher.cache().contains("https://chicago.craigslist.org/1.html"));
        assert!(!fetcher.cache().contains(url.as_str()));
    }

    #[tokio::test]
    async fn test_run_aborts_on_fetch_failure() {
        let cache_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let config = test_config(out_dir.path());

        let query = build_query(&config.dubious_terms);
        let url = search_url("chicago", &query).unwrap();

        // search page lists a posting the stub cannot serve
        let mut pages = HashMap::new();
        pages.insert(url.to_string(), search_page(&["https://chicago.craigslist.org/gone.html"]));

        let fetcher = CachedFetcher::new(StubFetcher { pages }, PageCache::new(cache_dir.path()).unwrap());
        let result = run(&fetcher, &config).await;

        assert!(matches!(result, Err(Error::Http(_))));
        // no partial report on failure
        assert!(std::fs::read_dir(out_dir.path()).unwrap().next().is_none());
    }
}
