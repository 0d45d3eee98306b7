//! Posting model and identity hashing.
//!
//! A `Posting` is one scraped job listing. Its identity is a deterministic
//! digest over a fixed field tuple: for ZipRecruiter the (title,
//! organization, location searched) triple, so the same job found on
//! different days or pages collapses to one record; for Craigslist the
//! posting URL.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Source site a posting was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Craigslist,
    ZipRecruiter,
}

impl Site {
    /// Short name used in report filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            Site::Craigslist => "craigslist",
            Site::ZipRecruiter => "ziprecruiter",
        }
    }
}

/// A dubious term found in a posting body, with the byte offset of its
/// first occurrence in the lowercased text. For ASCII bodies the offset
/// equals the character offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedMatch {
    pub term: String,
    pub offset: usize,
}

/// A single job listing scraped from a source site.
///
/// Immutable once constructed by an extractor, except that the driver
/// attaches flagger matches before filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub site: Site,
    /// Job title from the listing.
    pub title: String,
    /// Hiring organization; empty when the site does not expose one.
    pub organization: String,
    /// Lowercased body or snippet text, used for term matching.
    pub body: String,
    /// URL of the posting itself.
    pub url: String,
    /// URL of the search results page the posting was found on.
    pub source_url: String,
    /// Search term that produced this result.
    pub search_term: String,
    /// Location term that produced this result (a Craigslist subdomain or
    /// a ZipRecruiter location string).
    pub location_term: String,
    /// Post timestamp as reported by the site, when available.
    pub posted_at: Option<String>,
    /// Dubious terms found in `body`, in configured term order.
    #[serde(default)]
    pub matches: Vec<FlaggedMatch>,
}

impl Posting {
    /// Stable identity hash for deduplication.
    ///
    /// Craigslist postings are identified by URL; ZipRecruiter postings by
    /// the (title, organization, location searched) triple.
    pub fn identity(&self) -> String {
        match self.site {
            Site::Craigslist => url_id(&self.url),
            Site::ZipRecruiter => posting_id(&self.title, &self.organization, &self.location_term),
        }
    }

    /// Whether the flagger found at least one dubious term.
    pub fn is_flagged(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Human-readable review block: post metadata plus a context window
    /// around each flagged term.
    pub fn review_summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Job posted at {}\n{}\n{}\n",
            self.posted_at.as_deref().unwrap_or("unknown"),
            self.url,
            self.title
        ));
        for m in &self.matches {
            let context = crate::flag::match_context(&self.body, m, 40);
            out.push_str(&format!("Flagged term: \"{}\"\nContext of term: \"{}\"\n\n", m.term, context));
        }
        out
    }
}

/// Identity hash over the (title, organization, location searched) triple.
pub fn posting_id(title: &str, organization: &str, location_term: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(b"\n");
    hasher.update(organization.as_bytes());
    hasher.update(b"\n");
    hasher.update(location_term.as_bytes());
    hex::encode(hasher.finalize())
}

/// Identity hash over a posting URL.
pub fn url_id(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
