//! Locale-URL mapping
//!
//! This module assigns crawled pages to locales. For every locale it finds,
//! per content path, the URLs that are that locale's rendition of the content,
//! and it builds the content-path index used to resolve alternates.

mod index;

pub use index::PathIndex;

use crate::locale::{Locale, LocaleSet, Page};
use crate::url::normalize_key;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Result of mapping a run's pages onto its locales
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMapping {
    /// Locale key to its page list; the synthetic homepage always comes first
    pub pages: IndexMap<String, Vec<Page>>,

    /// Content path to every crawled URL carrying it
    pub path_index: PathIndex,

    /// The x-default locale, if one could be resolved
    pub default_locale: Option<Locale>,
}

impl LocaleMapping {
    /// The page list of a locale (empty if the locale was not mapped)
    pub fn pages_for(&self, locale: &Locale) -> &[Page] {
        self.pages
            .get(&locale.key())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of non-homepage entries across all locales
    pub fn mapped_page_count(&self) -> usize {
        self.pages
            .values()
            .map(|pages| pages.iter().filter(|p| !p.is_homepage).count())
            .sum()
    }

    /// Distinct crawled URLs placed in at least one locale
    ///
    /// A URL accepted by several locales counts once.
    pub fn mapped_url_count(&self) -> usize {
        self.pages
            .values()
            .flatten()
            .filter(|p| !p.is_homepage)
            .map(|p| normalize_key(&p.url))
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Maps pages onto locales
///
/// # Algorithm
///
/// 1. Resolve the default locale (flagged, else the unprefixed baseline)
/// 2. Index every non-root page by content path, deduplicating by normalized URL
/// 3. Seed each locale's list with its synthetic homepage entry
/// 4. For each locale and content path, append the indexed URLs the locale's
///    region rule accepts
///
/// A content path no locale accepts appears in no page list. Pages whose URL
/// is a site or locale root are left out of the index: every locale already
/// gets its homepage from step 3.
///
/// # Arguments
///
/// * `locales` - The run's locales
/// * `pages` - The crawled, indexable pages
///
/// # Returns
///
/// The per-locale page lists, the path index and the default locale
pub fn build_mapping(locales: &LocaleSet, pages: &[Page]) -> LocaleMapping {
    let default_locale = locales.default_locale().cloned();
    match &default_locale {
        Some(locale) => tracing::debug!("Default locale: {}", locale.key()),
        None => tracing::warn!("No default locale found, x-default links will be omitted"),
    }

    let mut path_index = PathIndex::new();
    for page in pages.iter().filter(|p| !p.is_homepage) {
        if !path_index.insert(page.content_path.clone(), &page.url) {
            tracing::debug!("Duplicate URL ignored: {}", page.url);
        }
    }

    let mut mapped = IndexMap::with_capacity(locales.len());
    for locale in locales.iter() {
        let rule = locales.rule(locale);
        let mut locale_pages = vec![Page::homepage(locale)];

        for (path, urls) in path_index.iter() {
            locale_pages.extend(
                urls.iter()
                    .filter(|url| rule.matches(url))
                    .map(|url| Page::with_path(url, path.clone())),
            );
        }

        tracing::debug!(
            "Locale {} mapped to {} pages",
            locale.key(),
            locale_pages.len() - 1
        );
        mapped.insert(locale.key(), locale_pages);
    }

    LocaleMapping {
        pages: mapped,
        path_index,
        default_locale,
    }
}
