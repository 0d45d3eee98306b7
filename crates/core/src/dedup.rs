//! First-seen deduplication over posting identities.

use std::collections::HashSet;

use crate::post::Posting;

/// Drop postings whose identity hash has already been seen, keeping the
/// first occurrence and preserving input order. Single pass, O(n).
pub fn dedupe(postings: Vec<Posting>) -> Vec<Posting> {
    let mut seen = HashSet::new();
    postings.into_iter().filter(|p| seen.insert(p.identity())).collect()
}
