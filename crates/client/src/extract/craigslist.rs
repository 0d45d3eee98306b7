//! Craigslist extraction: search-results rows and posting bodies.

use scraper::{Html, Selector};

use hirescan_core::{Posting, Site};

use super::{ExtractContext, normalize_whitespace};

/// A job listing reference pulled from a search results page, before the
/// posting itself has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRef {
    pub title: String,
    pub url: String,
    pub posted_at: Option<String>,
}

/// Extract listing references from a Craigslist search results page.
///
/// Selectors: `li.result-row`, title/link from `a.result-title`, post
/// time from `time.result-date[datetime]`. Rows missing the title link
/// are skipped.
pub fn extract_search_results(html: &str) -> Vec<ListingRef> {
    let Ok(row_sel) = Selector::parse("li.result-row") else {
        return Vec::new();
    };
    let Ok(title_sel) = Selector::parse("a.result-title") else {
        return Vec::new();
    };
    let Ok(time_sel) = Selector::parse("time.result-date") else {
        return Vec::new();
    };

    let doc = Html::parse_document(html);
    let mut listings = Vec::new();

    for row in doc.select(&row_sel) {
        let Some(link) = row.select(&title_sel).next() else {
            tracing::debug!("search result row without a title link, skipping");
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let title = normalize_whitespace(&link.text().collect::<String>());
        let posted_at = row
            .select(&time_sel)
            .next()
            .and_then(|t| t.value().attr("datetime"))
            .map(|s| s.to_string());

        listings.push(ListingRef { title, url: href.to_string(), posted_at });
    }

    listings
}

/// Extract a posting from a Craigslist posting page.
///
/// The body lives in `section#postingbody`. Returns `None` when that
/// region is absent. Body text is lowercased for term matching; the
/// flagger fills in `matches` downstream.
pub fn extract_posting(
    html: &str, listing: &ListingRef, ctx: &ExtractContext,
) -> Option<Posting> {
    let body_sel = Selector::parse("section#postingbody").ok()?;

    let doc = Html::parse_document(html);
    let section = doc.select(&body_sel).next()?;
    let body = normalize_whitespace(&section.text().collect::<String>()).to_lowercase();

    Some(Posting {
        site: Site::Craigslist,
        title: listing.title.clone(),
        organization: String::new(),
        body,
        url: listing.url.clone(),
        source_url: ctx.source_url.clone(),
        search_term: ctx.search_term.clone(),
        location_term: ctx.location_term.clone(),
        posted_at: listing.posted_at.clone(),
        matches: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ExtractContext {
        ExtractContext {
            source_url: "https://chicago.craigslist.org/search/jjj?query=felony".to_string(),
            search_term: "felony".to_string(),
            location_term: "chicago".to_string(),
        }
    }

    const SEARCH_HTML: &str = r#"
        <html><body><ul class="rows">
            <li class="result-row">
                <time class="result-date" datetime="2020-07-06 12:30">Jul 6</time>
                <a class="result-title" href="https://chicago.craigslist.org/chc/lab/1.html">Warehouse  Associate</a>
            </li>
            <li class="result-row">
                <a class="result-title" href="https://chicago.craigslist.org/chc/lab/2.html">Line Cook</a>
            </li>
            <li class="result-row">
                <span>malformed row without a link</span>
            </li>
        </ul></body></html>
    "#;

    #[test]
    fn test_extract_search_results() {
        let listings = extract_search_results(SEARCH_HTML);
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "Warehouse Associate");
        assert_eq!(listings[0].url, "https://chicago.craigslist.org/chc/lab/1.html");
        assert_eq!(listings[0].posted_at.as_deref(), Some("2020-07-06 12:30"));
        assert_eq!(listings[1].title, "Line Cook");
        assert!(listings[1].posted_at.is_none());
    }

    #[test]
    fn test_extract_search_results_empty_page() {
        assert!(extract_search_results("<html><body>no rows here</body></html>").is_empty());
    }

    #[test]
    fn test_extract_posting_body() {
        let html = r#"
            <html><body>
                <section id="postingbody">
                    Must PASS a Background Check
                    and have NO Felonies.
                </section>
            </body></html>
        "#;
        let listing = ListingRef {
            title: "Warehouse Associate".to_string(),
            url: "https://chicago.craigslist.org/chc/lab/1.html".to_string(),
            posted_at: Some("2020-07-06 12:30".to_string()),
        };

        let posting = extract_posting(html, &listing, &ctx()).unwrap();
        assert_eq!(posting.body, "must pass a background check and have no felonies.");
        assert_eq!(posting.title, "Warehouse Associate");
        assert_eq!(posting.location_term, "chicago");
        assert_eq!(posting.site, Site::Craigslist);
        assert!(posting.matches.is_empty());
    }

    #[test]
    fn test_extract_posting_missing_body_is_none() {
        let html = "<html><body><div>page moved</div></body></html>";
        let listing = ListingRef { title: "x".to_string(), url: "https://e.org/1".to_string(), posted_at: None };
        assert!(extract_posting(html, &listing, &ctx()).is_none());
    }
}
