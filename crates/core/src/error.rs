//! Unified error types for hirescan.

/// Unified error types for the hirescan pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Network or HTTP-level failure. Not retried; a failed fetch
    /// propagates and ends the run.
    #[error("http error: {0}")]
    Http(String),

    /// Fetch response exceeded the configured byte limit.
    #[error("response too large: {0}")]
    FetchTooLarge(String),

    /// Cache or report file I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
