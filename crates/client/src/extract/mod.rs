//! Fixed-selector posting extraction.
//!
//! Each supported site gets its own module with selectors tied to that
//! site's markup. Extraction is soft-fail throughout: a page or result
//! block missing the expected DOM region yields no posting rather than an
//! error, since page structure drift is common and unqueryable ahead of
//! time.

pub mod craigslist;
pub mod ziprecruiter;

/// Search context attached to every extracted posting.
#[derive(Debug, Clone)]
pub struct ExtractContext {
    /// URL of the search results page being processed.
    pub source_url: String,
    /// Search term that produced the results.
    pub search_term: String,
    /// Location term (Craigslist subdomain or ZipRecruiter location).
    pub location_term: String,
}

/// Collapse runs of whitespace and trim, for text pulled out of nested
/// markup.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
