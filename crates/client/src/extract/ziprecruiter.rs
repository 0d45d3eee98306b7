//! ZipRecruiter extraction: result blocks on a search page.
//!
//! One search page carries many `div.job_content` blocks; each becomes a
//! `Posting` directly, with no second fetch.

use scraper::{ElementRef, Html, Selector};

use hirescan_core::{Posting, Site};

use super::{ExtractContext, normalize_whitespace};

struct BlockSelectors {
    block: Selector,
    title: Selector,
    org: Selector,
    snippet: Selector,
    link: Selector,
}

impl BlockSelectors {
    fn new() -> Option<Self> {
        Some(Self {
            block: Selector::parse("div.job_content").ok()?,
            title: Selector::parse("span.just_job_title").ok()?,
            org: Selector::parse("a.t_org_link").ok()?,
            snippet: Selector::parse("p.job_snippet").ok()?,
            link: Selector::parse("a.job_link").ok()?,
        })
    }
}

/// Extract all job postings from a ZipRecruiter search results page.
///
/// A block missing any required node (title, organization, snippet, link)
/// is skipped. Zero blocks signals the driver to stop paging.
pub fn extract_blocks(html: &str, ctx: &ExtractContext) -> Vec<Posting> {
    let Some(selectors) = BlockSelectors::new() else {
        return Vec::new();
    };

    let doc = Html::parse_document(html);
    let mut postings = Vec::new();

    for block in doc.select(&selectors.block) {
        match extract_block(block, &selectors, ctx) {
            Some(posting) => postings.push(posting),
            None => tracing::debug!(source = %ctx.source_url, "job block missing expected node, skipping"),
        }
    }

    postings
}

fn extract_block(block: ElementRef<'_>, selectors: &BlockSelectors, ctx: &ExtractContext) -> Option<Posting> {
    let title = block.select(&selectors.title).next()?;
    let org = block.select(&selectors.org).next()?;
    let snippet = block.select(&selectors.snippet).next()?;
    let url = block.select(&selectors.link).next()?.value().attr("href")?;

    Some(Posting {
        site: Site::ZipRecruiter,
        title: normalize_whitespace(&title.text().collect::<String>()),
        organization: normalize_whitespace(&org.text().collect::<String>()),
        body: normalize_whitespace(&snippet.text().collect::<String>()).to_lowercase(),
        url: url.to_string(),
        source_url: ctx.source_url.clone(),
        search_term: ctx.search_term.clone(),
        location_term: ctx.location_term.clone(),
        posted_at: None,
        matches: Vec::new(),
    })
}
