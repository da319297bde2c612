//! Keyword matching for the `find` command.
//!
//! A record matches when any keyword is a case-insensitive substring of any
//! of its search fields. There is no ranking: the result is simply the set of
//! matching records, in the order they first appear in the input.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// A record that can be searched by keyword.
pub trait Searchable {
    /// The raw field tokens to compare keywords against.
    ///
    /// Word-like fields (names, addresses) contribute one token per word;
    /// atomic fields (phone, email) contribute their whole value.
    fn search_fields(&self) -> Vec<&str>;

    /// Lowercased, non-empty search tokens.
    fn search_tokens(&self) -> Vec<String> {
        self.search_fields()
            .into_iter()
            .filter(|field| !field.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

/// A set of lowercased search keywords.
///
/// Keywords are normalized once on construction. Empty keywords are dropped
/// since they cannot match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: BTreeSet<String>,
}

impl KeywordSet {
    /// Build a keyword set from any collection of strings.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self { keywords }
    }

    /// Split free text on whitespace into keywords.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split_whitespace())
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Iterate over the lowercased keywords in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Whether any keyword is contained in any of the given lowercased tokens.
    pub fn matches_any(&self, tokens: &[String]) -> bool {
        self.keywords
            .iter()
            .any(|keyword| tokens.iter().any(|token| token.contains(keyword.as_str())))
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Keyword matcher over a collection of searchable records.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl KeywordMatcher {
    /// Create a new KeywordMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find every record matching at least one keyword.
    ///
    /// # Arguments
    /// * `keywords` - Normalized keyword set
    /// * `records` - Records to scan
    ///
    /// # Returns
    /// References to the matching records. Equal records are collapsed into
    /// one entry; the first occurrence wins.
    pub fn find_matches<'a, T>(&self, keywords: &KeywordSet, records: &'a [T]) -> Vec<&'a T>
    where
        T: Searchable + Eq + Hash,
    {
        let mut seen: HashSet<&'a T> = HashSet::new();
        let mut matches = Vec::new();

        if !keywords.is_empty() {
            for record in records {
                if seen.contains(record) {
                    continue;
                }
                if keywords.matches_any(&record.search_tokens()) {
                    seen.insert(record);
                    matches.push(record);
                }
            }
        }

        tracing::debug!(
            keywords = keywords.len(),
            scanned = records.len(),
            matched = matches.len(),
            "Keyword match complete"
        );

        matches
    }
}
