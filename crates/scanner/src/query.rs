//! Search query construction from the ordered term list.

/// Quote a term for a site search query if it is a multi-word phrase.
pub fn quote_term(term: &str) -> String {
    if term.contains(' ') { format!("\"{term}\"") } else { term.to_string() }
}

/// Build the combined Craigslist query: terms OR-ed with `|`, multi-word
/// phrases quoted. Term order follows the configured list, so the query
/// string is stable across runs.
pub fn build_query(terms: &[String]) -> String {
    terms.iter().map(|t| quote_term(t)).collect::<Vec<_>>().join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_single_word() {
        assert_eq!(quote_term("felony"), "felony");
    }

    #[test]
    fn test_quote_phrase() {
        assert_eq!(quote_term("pass a background check"), "\"pass a background check\"");
    }

    #[test]
    fn test_build_query_is_ordered() {
        let terms = vec!["arrest".to_string(), "clean record".to_string(), "felony".to_string()];
        assert_eq!(build_query(&terms), "arrest|\"clean record\"|felony");
    }

    #[test]
    fn test_build_query_empty() {
        assert_eq!(build_query(&[]), "");
    }
}
