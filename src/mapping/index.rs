use crate::url::{normalize_key, ContentPath};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Content path to the crawled URLs that carry it
///
/// URLs are deduplicated by normalized key: the first original-cased URL seen
/// for a key is the one kept. Paths and URLs iterate in insertion order, so
/// every first-match lookup is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathIndex {
    paths: IndexMap<ContentPath, Vec<String>>,
    seen: HashSet<String>,
}

impl PathIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a URL under a content path
    ///
    /// Returns false if a URL with the same normalized key was already
    /// recorded.
    pub fn insert(&mut self, path: ContentPath, url: &str) -> bool {
        if !self.seen.insert(normalize_key(url)) {
            return false;
        }
        self.paths.entry(path).or_default().push(url.to_string());
        true
    }

    /// The URLs recorded for a content path, in insertion order
    pub fn urls(&self, path: &ContentPath) -> &[String] {
        self.paths.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    /// Finds the crawled URL under `path` that normalize-matches `expected`
    ///
    /// The first match in insertion order wins.
    pub fn find(&self, path: &ContentPath, expected: &str) -> Option<&str> {
        let expected = normalize_key(expected);
        self.urls(path)
            .iter()
            .find(|url| normalize_key(url) == expected)
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContentPath, &[String])> {
        self.paths.iter().map(|(path, urls)| (path, urls.as_slice()))
    }

    /// Number of distinct content paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of distinct URLs across all paths
    pub fn url_count(&self) -> usize {
        self.seen.len()
    }
}
