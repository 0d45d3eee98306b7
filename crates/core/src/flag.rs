//! Term flagging over posting body text.
//!
//! Exact substring matching, case handled by lowercasing bodies at
//! extraction time. Terms are an ordered slice, so match output is
//! deterministic: first-listed term first, regardless of where each term
//! appears in the text.

use crate::post::FlaggedMatch;

/// Scan `body` for each term, recording the byte offset of the first
/// occurrence. Multi-word terms match as exact phrases.
///
/// `body` is expected to be lowercased already; terms are lowercased here
/// so a mixed-case config entry still matches.
pub fn flag_terms(body: &str, terms: &[String]) -> Vec<FlaggedMatch> {
    let mut matches = Vec::new();
    for term in terms {
        let needle = term.to_lowercase();
        if let Some(offset) = body.find(&needle) {
            matches.push(FlaggedMatch { term: term.clone(), offset });
        }
    }
    matches
}

/// A window of up to `radius` characters on each side of a match, for
/// human review.
///
/// Walks `char_indices` so the window never splits a code point, whatever
/// bytes surround the match.
pub fn match_context<'a>(body: &'a str, m: &FlaggedMatch, radius: usize) -> &'a str {
    if m.offset > body.len() {
        return "";
    }

    let start = if radius == 0 {
        m.offset
    } else {
        body[..m.offset]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };

    let match_end = (m.offset + m.term.len()).min(body.len());
    let end = body[match_end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| match_end + i)
        .unwrap_or(body.len());

    &body[start..end]
}
