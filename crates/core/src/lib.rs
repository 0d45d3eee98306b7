//! Core types and shared functionality for hirescan.
//!
//! This crate provides:
//! - Flat-file content-addressed page cache
//! - Posting model with identity hashing
//! - Term flagging and deduplication
//! - CSV report writers
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod dedup;
pub mod error;
pub mod flag;
pub mod post;
pub mod report;

pub use cache::PageCache;
pub use config::AppConfig;
pub use dedup::dedupe;
pub use error::Error;
pub use flag::flag_terms;
pub use post::{FlaggedMatch, Posting, Site};
