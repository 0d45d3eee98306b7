//! Cache-backed page fetching.
//!
//! A cache hit returns the bytes previously written to disk without any
//! network call; a miss performs a GET, persists the raw body under the
//! URL's hashed filename, and returns it.

use async_trait::async_trait;
use bytes::Bytes;

use hirescan_core::{Error, PageCache};

use super::FetchClient;

/// Transport seam for the cached fetcher, so tests can substitute a stub
/// and prove that cache hits never touch the network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the raw body bytes for `url`.
    async fn fetch_bytes(&self, url: &str) -> Result<Bytes, Error>;
}

#[async_trait]
impl Fetcher for FetchClient {
    async fn fetch_bytes(&self, url: &str) -> Result<Bytes, Error> {
        Ok(self.fetch(url).await?.bytes)
    }
}

/// Fetcher that consults the on-disk page cache before the network.
pub struct CachedFetcher<F> {
    fetcher: F,
    cache: PageCache,
    ignore_cache: bool,
}

impl<F: Fetcher> CachedFetcher<F> {
    pub fn new(fetcher: F, cache: PageCache) -> Self {
        Self { fetcher, cache, ignore_cache: false }
    }

    /// Skip cache reads and always re-fetch. Fetched bytes are still
    /// written to the cache.
    pub fn ignore_cache(mut self, ignore: bool) -> Self {
        self.ignore_cache = ignore;
        self
    }

    /// Get a page through the cache.
    ///
    /// Hit: returns disk bytes, no network call. Miss: GET, persist, return.
    /// A failed GET propagates; there is no retry.
    pub async fn get_page(&self, url: &str) -> Result<Vec<u8>, Error> {
        if !self.ignore_cache
            && let Some(bytes) = self.cache.get(url)?
        {
            tracing::info!(url, "reading from cache");
            return Ok(bytes);
        }

        tracing::info!(url, "not found locally, requesting");
        let bytes = self.fetcher.fetch_bytes(url).await?;
        self.cache.put(url, &bytes)?;
        Ok(bytes.to_vec())
    }

    /// Get a page directly from the network, bypassing the cache read and
    /// leaving no cache entry. Used for search-results pages, whose content
    /// changes between runs.
    pub async fn get_fresh(&self, url: &str) -> Result<Vec<u8>, Error> {
        let bytes = self.fetcher.fetch_bytes(url).await?;
        Ok(bytes.to_vec())
    }

    /// The underlying page cache.
    pub fn cache(&self) -> &PageCache {
        &self.cache
    }
}
