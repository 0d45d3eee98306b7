//! Flat-file content-addressed page cache.
//!
//! Each fetched page is stored as a single file in a flat directory, named
//! by the SHA-256 hex digest of its URL. Entries are write-once raw response
//! bytes with no metadata sidecar. Nothing is evicted during a run; growth
//! is bounded only by the explicit purge operations below, which operators
//! are expected to run between scans.

pub mod hash;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Error;

pub use hash::cache_key;

/// On-disk cache of raw fetched pages, keyed by URL hash.
#[derive(Debug, Clone)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    /// Open a cache rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The cache root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        self.dir.join(cache_key(url))
    }

    /// Whether a cached entry exists for `url`.
    pub fn contains(&self, url: &str) -> bool {
        self.entry_path(url).is_file()
    }

    /// Read the cached bytes for `url`, or `None` on a miss.
    pub fn get(&self, url: &str) -> Result<Option<Vec<u8>>, Error> {
        let path = self.entry_path(url);
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        tracing::debug!(url, path = %path.display(), "cache hit");
        Ok(Some(bytes))
    }

    /// Persist raw response bytes for `url`.
    pub fn put(&self, url: &str, bytes: &[u8]) -> Result<(), Error> {
        let path = self.entry_path(url);
        fs::write(&path, bytes)?;
        tracing::debug!(url, bytes = bytes.len(), "cached page");
        Ok(())
    }

    /// Delete entries whose modification time is older than `max_age`.
    ///
    /// Returns the number of deleted entries. Entries whose metadata cannot
    /// be read are left in place.
    pub fn purge_older_than(&self, max_age: Duration) -> Result<usize, Error> {
        let mut deleted = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
                continue;
            };
            let age = modified.elapsed().unwrap_or(Duration::ZERO);
            if age > max_age {
                fs::remove_file(&path)?;
                deleted += 1;
            }
        }
        tracing::info!(deleted, "purged cache entries by age");
        Ok(deleted)
    }

    /// Delete every entry in the cache.
    ///
    /// Returns the number of deleted entries.
    pub fn purge_all(&self) -> Result<usize, Error> {
        let mut deleted = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path)?;
                deleted += 1;
            }
        }
        tracing::info!(deleted, "purged all cache entries");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_put_and_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let cache = PageCache::new(dir.path()).unwrap();

        let url = "https://example.com/posting/123";
        cache.put(url, b"<html>body</html>").unwrap();

        let bytes = cache.get(url).unwrap().unwrap();
        assert_eq!(bytes, b"<html>body</html>");
        assert!(cache.contains(url));
    }

    #[test]
    fn test_get_miss_returns_none() {
        let dir = TempDir::new().unwrap();
        let cache = PageCache::new(dir.path()).unwrap();

        assert!(cache.get("https://example.com/absent").unwrap().is_none());
        assert!(!cache.contains("https://example.com/absent"));
    }

    #[test]
    fn test_entries_are_keyed_by_url_hash() {
        let dir = TempDir::new().unwrap();
        let cache = PageCache::new(dir.path()).unwrap();

        let url = "https://example.com/posting/123";
        cache.put(url, b"content").unwrap();

        let expected = dir.path().join(cache_key(url));
        assert!(expected.is_file());
    }

    #[test]
    fn test_purge_older_than_keeps_fresh_entries() {
        let dir = TempDir::new().unwrap();
        let cache = PageCache::new(dir.path()).unwrap();

        cache.put("https://example.com/a", b"a").unwrap();
        cache.put("https://example.com/b", b"b").unwrap();

        let deleted = cache.purge_older_than(Duration::from_secs(3600)).unwrap();
        assert_eq!(deleted, 0);
        assert!(cache.contains("https://example.com/a"));
    }

    #[test]
    fn test_purge_all() {
        let dir = TempDir::new().unwrap();
        let cache = PageCache::new(dir.path()).unwrap();

        cache.put("https://example.com/a", b"a").unwrap();
        cache.put("https://example.com/b", b"b").unwrap();

        let deleted = cache.purge_all().unwrap();
        assert_eq!(deleted, 2);
        assert!(!cache.contains("https://example.com/a"));
        assert!(!cache.contains("https://example.com/b"));
    }

    #[test]
    fn test_put_overwrite_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let cache = PageCache::new(dir.path()).unwrap();

        let url = "https://example.com/posting/123";
        cache.put(url, b"first").unwrap();
        cache.put(url, b"first").unwrap();

        assert_eq!(cache.get(url).unwrap().unwrap(), b"first");
    }
}
