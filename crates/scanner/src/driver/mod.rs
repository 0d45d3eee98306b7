//! Search drivers.
//!
//! One driver per site, each walking its (site-or-location × term [× page])
//! space sequentially with fixed politeness delays, then deduplicating and
//! writing a single report file. There is no retry or backoff: a transport
//! failure propagates and ends the run.

pub mod craigslist;
pub mod ziprecruiter;

use std::path::PathBuf;

/// Summary of one driver run.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Postings examined (Craigslist) or result blocks extracted
    /// (ZipRecruiter).
    pub processed: usize,
    /// Postings retained after flagging, before deduplication.
    pub flagged: usize,
    /// Data rows written to the report.
    pub rows_written: usize,
    /// Path of the report file.
    pub report_path: PathBuf,
}
