//! Client code for hirescan.
//!
//! This crate provides the HTTP fetch pipeline, the cache-backed fetcher,
//! and the fixed-selector posting extractors used by the scanner.

pub mod extract;
pub mod fetch;

pub use extract::{ExtractContext, craigslist, ziprecruiter};
pub use fetch::{CachedFetcher, FetchClient, FetchConfig, FetchResponse, Fetcher};
