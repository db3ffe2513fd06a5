//! Per-locale sitemap construction
//!
//! A document is built in three steps: the homepage entry with its
//! alternates, then one entry per mapped page in input order, then the
//! finished document is handed back with the links it recorded.

use crate::locale::{Locale, LocaleSet, Page};
use crate::mapping::PathIndex;
use crate::sitemap::document::{Alternate, LinkRecord, SitemapDocument, UrlEntry, X_DEFAULT};
use crate::url::{extract_content_path, normalize_key, ContentPath, RegionRule};
use std::collections::HashSet;

/// Options controlling which alternates a document carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Emit an alternate pointing at the document's own locale
    pub self_reference: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            self_reference: true,
        }
    }
}

/// Builds the sitemap document of one locale
///
/// Every alternate points at a URL that was actually crawled: for each target
/// locale the URL it would use for the page's content path is constructed and
/// looked up in the path index by normalized key, and the crawled spelling of
/// the URL is written. Locales without a rendition get no link.
///
/// # Arguments
///
/// * `locale` - The locale the document is for
/// * `pages` - The locale's page list from the mapping
/// * `locales` - All locales of the run, in output order
/// * `path_index` - Content path to crawled URLs
/// * `default_locale` - The x-default target, if any
/// * `options` - Alternate options
///
/// # Returns
///
/// The document and the links written to it, in output order
pub fn build_document(
    locale: &Locale,
    pages: &[Page],
    locales: &LocaleSet,
    path_index: &PathIndex,
    default_locale: Option<&Locale>,
    options: &BuildOptions,
) -> (SitemapDocument, Vec<LinkRecord>) {
    let mut builder = DocumentBuilder::new(locale, locales, path_index, default_locale, options);
    builder.open();
    builder.stream(pages);
    builder.close()
}

struct DocumentBuilder<'a> {
    locale: &'a Locale,
    locales: &'a LocaleSet,
    path_index: &'a PathIndex,
    default_rule: Option<RegionRule>,
    default_locale: Option<&'a Locale>,
    options: &'a BuildOptions,
    document: SitemapDocument,
    links: Vec<LinkRecord>,
    emitted: HashSet<String>,
}

impl<'a> DocumentBuilder<'a> {
    fn new(
        locale: &'a Locale,
        locales: &'a LocaleSet,
        path_index: &'a PathIndex,
        default_locale: Option<&'a Locale>,
        options: &'a BuildOptions,
    ) -> Self {
        Self {
            locale,
            locales,
            path_index,
            default_rule: default_locale.map(|d| locales.rule(d)),
            default_locale,
            options,
            document: SitemapDocument::new(locale.sitemap_id()),
            links: Vec::new(),
            emitted: HashSet::new(),
        }
    }

    /// Writes the homepage entry, linking every locale's homepage
    fn open(&mut self) {
        let mut entry = UrlEntry::new(self.locale.homepage_loc());

        if let Some(default) = self.default_locale {
            let alternate = Alternate::new(X_DEFAULT, default.homepage_loc());
            self.record(&alternate);
            entry.x_default = Some(alternate);
        }

        for target in self.targets() {
            let alternate = Alternate::new(target.hreflang(), target.homepage_loc());
            self.record(&alternate);
            entry.alternates.push(alternate);
        }

        self.emitted.insert(normalize_key(&entry.loc));
        self.document.push(entry);
    }

    /// Writes one entry per page, skipping URLs already listed
    fn stream(&mut self, pages: &[Page]) {
        for page in pages.iter().filter(|p| !p.is_homepage) {
            if !self.emitted.insert(normalize_key(&page.url)) {
                self.document.stats.duplicates_skipped += 1;
                continue;
            }

            let mut entry = UrlEntry::new(page.url.as_str());
            match extract_content_path(&page.url) {
                Some(path) if path == page.content_path && !path.is_root() => {
                    self.attach_alternates(&mut entry, &path);
                }
                _ => {
                    tracing::warn!(
                        "Content path of {} could not be re-derived, listing it without alternates",
                        page.url
                    );
                    self.document.stats.alternates_dropped += 1;
                }
            }
            self.document.push(entry);
        }
    }

    fn close(self) -> (SitemapDocument, Vec<LinkRecord>) {
        tracing::debug!(
            "Built sitemap {} with {} entries and {} links",
            self.document.sitemap_id,
            self.document.stats.entries,
            self.links.len()
        );
        (self.document, self.links)
    }

    fn attach_alternates(&mut self, entry: &mut UrlEntry, path: &ContentPath) {
        let path_index = self.path_index;
        let x_default = self
            .default_rule
            .as_ref()
            .and_then(|rule| resolve(path_index, rule, path));
        if let Some(actual) = x_default {
            let alternate = Alternate::new(X_DEFAULT, actual);
            self.record(&alternate);
            entry.x_default = Some(alternate);
        }

        for target in self.targets() {
            let rule = self.locales.rule(target);
            if let Some(actual) = resolve(path_index, &rule, path) {
                let alternate = Alternate::new(target.hreflang(), actual);
                self.record(&alternate);
                entry.alternates.push(alternate);
            }
        }
    }

    /// Locales that receive alternates in this document
    fn targets(&self) -> Vec<&'a Locale> {
        let locales: &'a LocaleSet = self.locales;
        let own_key = self.locale.key();
        let self_reference = self.options.self_reference;
        locales
            .iter()
            .filter(|target| self_reference || target.key() != own_key)
            .collect()
    }

    fn record(&mut self, alternate: &Alternate) {
        self.links.push(LinkRecord::new(
            &alternate.href,
            &self.document.sitemap_id,
            &alternate.hreflang,
        ));
    }
}

/// Finds the crawled URL a locale uses for a content path
fn resolve<'i>(index: &'i PathIndex, rule: &RegionRule, path: &ContentPath) -> Option<&'i str> {
    index
        .find(path, &rule.expected_url(path))
        .filter(|url| rule.matches(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::build_mapping;
    use crate::url::UnprefixedSet;

    fn two_locales() -> LocaleSet {
        LocaleSet::from_locales(
            vec![
                Locale::new("https://example.com", "us", "en", None, true),
                Locale::new("https://example.com/fr/fr", "fr", "fr", None, false),
            ],
            UnprefixedSet::default(),
        )
    }

    fn build(
        set: &LocaleSet,
        urls: &[&str],
        key: &str,
        options: BuildOptions,
    ) -> (SitemapDocument, Vec<LinkRecord>) {
        let pages: Vec<Page> = urls.iter().filter_map(|u| Page::from_url(u)).collect();
        let mapping = build_mapping(set, &pages);
        let locale = set.get(key).unwrap();
        build_document(
            locale,
            mapping.pages_for(locale),
            set,
            &mapping.path_index,
            mapping.default_locale.as_ref(),
            &options,
        )
    }

    fn hrefs(entry: &UrlEntry) -> Vec<(String, String)> {
        entry
            .links()
            .map(|l| (l.hreflang.clone(), l.href.clone()))
            .collect()
    }

    #[test]
    fn test_homepage_entry() {
        let set = two_locales();
        let (doc, links) = build(&set, &[], "fr-fr", BuildOptions::default());

        assert_eq!(doc.len(), 1);
        let home = &doc.entries[0];
        assert_eq!(home.loc, "https://example.com/fr/fr/");
        assert_eq!(
            hrefs(home),
            vec![
                ("x-default".to_string(), "https://example.com/".to_string()),
                ("en".to_string(), "https://example.com/".to_string()),
                ("fr-fr".to_string(), "https://example.com/fr/fr/".to_string()),
            ]
        );
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l.sitemap_id == "fr_fr_fr_fr"));
    }

    #[test]
    fn test_shoes_scenario_default_document() {
        let set = two_locales();
        let (doc, _) = build(
            &set,
            &["https://example.com/shoes", "https://example.com/fr/fr/shoes"],
            "en",
            BuildOptions::default(),
        );

        let entry = doc.entry("https://example.com/shoes").unwrap();
        assert_eq!(
            hrefs(entry),
            vec![
                ("x-default".to_string(), "https://example.com/shoes".to_string()),
                ("en".to_string(), "https://example.com/shoes".to_string()),
                ("fr-fr".to_string(), "https://example.com/fr/fr/shoes".to_string()),
            ]
        );
    }

    #[test]
    fn test_shoes_scenario_french_document() {
        let set = two_locales();
        let (doc, links) = build(
            &set,
            &["https://example.com/shoes", "https://example.com/fr/fr/shoes"],
            "fr-fr",
            BuildOptions::default(),
        );

        let entry = doc.entry("https://example.com/fr/fr/shoes").unwrap();
        let x_default = entry.x_default.as_ref().unwrap();
        assert_eq!(x_default.href, "https://example.com/shoes");

        let en = entry.alternates.iter().find(|a| a.hreflang == "en").unwrap();
        assert_eq!(en.href, "https://example.com/shoes");

        assert!(links.contains(&LinkRecord::new(
            "https://example.com/shoes",
            "fr_fr_fr_fr",
            "en"
        )));
    }

    #[test]
    fn test_href_keeps_crawled_case() {
        let set = two_locales();
        let (doc, _) = build(
            &set,
            &["https://example.com/shoes", "https://example.com/FR/FR/Shoes"],
            "en",
            BuildOptions::default(),
        );

        let entry = doc.entry("https://example.com/shoes").unwrap();
        let fr = entry.alternates.iter().find(|a| a.hreflang == "fr-fr").unwrap();
        assert_eq!(fr.href, "https://example.com/FR/FR/Shoes");
    }

    #[test]
    fn test_missing_rendition_gets_no_link() {
        let set = two_locales();
        let (doc, links) = build(
            &set,
            &["https://example.com/fr/fr/chapeaux"],
            "fr-fr",
            BuildOptions::default(),
        );

        let entry = doc.entry("https://example.com/fr/fr/chapeaux").unwrap();
        assert!(entry.x_default.is_none());
        assert_eq!(entry.alternates.len(), 1);
        assert_eq!(entry.alternates[0].hreflang, "fr-fr");
        assert!(!links.iter().any(|l| l.url.ends_with("/chapeaux") && l.hreflang == "en"));
    }

    #[test]
    fn test_exactly_one_x_default_when_default_exists() {
        let set = two_locales();
        let (doc, _) = build(
            &set,
            &[
                "https://example.com/shoes",
                "https://example.com/fr/fr/shoes",
                "https://example.com/hats",
            ],
            "en",
            BuildOptions::default(),
        );

        for entry in &doc.entries {
            let count = entry.links().filter(|l| l.is_x_default()).count();
            assert_eq!(count, 1, "entry {}", entry.loc);
        }
    }

    #[test]
    fn test_without_self_reference() {
        let set = two_locales();
        let options = BuildOptions {
            self_reference: false,
        };
        let (doc, _) = build(
            &set,
            &["https://example.com/shoes", "https://example.com/fr/fr/shoes"],
            "en",
            options,
        );

        let home_tags: Vec<&str> = doc.entries[0]
            .alternates
            .iter()
            .map(|a| a.hreflang.as_str())
            .collect();
        assert_eq!(home_tags, vec!["fr-fr"]);

        let entry = doc.entry("https://example.com/shoes").unwrap();
        assert_eq!(entry.alternates.len(), 1);
        assert_eq!(entry.alternates[0].hreflang, "fr-fr");
        assert!(entry.x_default.is_some());
    }

    #[test]
    fn test_no_default_locale_means_no_x_default() {
        let set = LocaleSet::from_locales(
            vec![
                Locale::new("https://example.com/fr/fr", "fr", "fr", None, false),
                Locale::new("https://example.com/de/de", "de", "de", None, false),
            ],
            UnprefixedSet::default(),
        );
        let (doc, links) = build(
            &set,
            &["https://example.com/fr/fr/a", "https://example.com/de/de/a"],
            "fr-fr",
            BuildOptions::default(),
        );

        assert!(doc.entries.iter().all(|e| e.x_default.is_none()));
        assert!(links.iter().all(|l| l.hreflang != X_DEFAULT));
        let entry = doc.entry("https://example.com/fr/fr/a").unwrap();
        assert_eq!(entry.alternates.len(), 2);
    }

    #[test]
    fn test_duplicate_pages_listed_once() {
        let set = two_locales();
        let locale = set.get("en").unwrap();
        let pages = vec![
            Page::homepage(locale),
            Page::with_path("https://example.com/shoes", ContentPath::new("shoes")),
            Page::with_path("https://example.com/Shoes/", ContentPath::new("shoes")),
            Page::with_path("https://example.com", ContentPath::new("")),
        ];
        let mut index = PathIndex::new();
        index.insert(ContentPath::new("shoes"), "https://example.com/shoes");

        let (doc, _) = build_document(
            locale,
            &pages,
            &set,
            &index,
            set.default_locale(),
            &BuildOptions::default(),
        );

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.stats.duplicates_skipped, 2);
    }

    #[test]
    fn test_inconsistent_path_keeps_bare_entry() {
        let set = two_locales();
        let locale = set.get("en").unwrap();
        let pages = vec![Page::with_path(
            "https://example.com/shoes",
            ContentPath::new("boots"),
        )];
        let mut index = PathIndex::new();
        index.insert(ContentPath::new("boots"), "https://example.com/shoes");

        let (doc, links) = build_document(
            locale,
            &pages,
            &set,
            &index,
            set.default_locale(),
            &BuildOptions::default(),
        );

        let entry = doc.entry("https://example.com/shoes").unwrap();
        assert_eq!(entry.link_count(), 0);
        assert_eq!(doc.stats.alternates_dropped, 1);
        assert!(links.iter().all(|l| l.url != "https://example.com/shoes"));
    }

    #[test]
    fn test_links_match_document() {
        let set = two_locales();
        let (doc, links) = build(
            &set,
            &["https://example.com/shoes", "https://example.com/fr/fr/shoes"],
            "en",
            BuildOptions::default(),
        );

        let emitted: Vec<(String, String)> = doc
            .entries
            .iter()
            .flat_map(|e| e.links().map(|l| (l.href.clone(), l.hreflang.clone())))
            .collect();
        let recorded: Vec<(String, String)> = links
            .iter()
            .map(|l| (l.url.clone(), l.hreflang.clone()))
            .collect();
        assert_eq!(emitted, recorded);
        assert_eq!(doc.stats.alternates, links.len());
    }
}
