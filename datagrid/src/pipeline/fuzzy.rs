//! Fuzzy cell matching using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// A compiled fuzzy term with its own matcher.
pub(super) struct FuzzyTerm {
    pattern: Pattern,
    matcher: Matcher,
    buf: Vec<char>,
}

impl FuzzyTerm {
    pub(super) fn new(query: &str) -> Self {
        Self {
            pattern: Pattern::new(
                query.trim(),
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            ),
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::new(),
        }
    }

    /// Returns `true` if `haystack` matches the term.
    pub(super) fn matches(&mut self, haystack: &str) -> bool {
        self.buf.clear();
        let haystack = Utf32Str::new(haystack, &mut self.buf);
        self.pattern.score(haystack, &mut self.matcher).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_subsequence() {
        let mut term = FuzzyTerm::new("ape");
        assert!(term.matches("Apple"));
        assert!(!term.matches("banana"));
    }
}
