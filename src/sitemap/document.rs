use serde::Serialize;

/// The `hreflang` value marking the fallback alternate
pub const X_DEFAULT: &str = "x-default";

/// One `<xhtml:link rel="alternate">` of a sitemap entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

impl Alternate {
    pub fn new(hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            hreflang: hreflang.into(),
            href: href.into(),
        }
    }

    pub fn is_x_default(&self) -> bool {
        self.hreflang == X_DEFAULT
    }
}

/// One `<url>` entry of a sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,

    /// The x-default link, written before the per-locale alternates
    pub x_default: Option<Alternate>,

    pub alternates: Vec<Alternate>,
}

impl UrlEntry {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            x_default: None,
            alternates: Vec::new(),
        }
    }

    /// All links in output order: x-default first, then alternates
    pub fn links(&self) -> impl Iterator<Item = &Alternate> {
        self.x_default.iter().chain(self.alternates.iter())
    }

    pub fn link_count(&self) -> usize {
        self.alternates.len() + usize::from(self.x_default.is_some())
    }
}

/// Counters collected while building one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// `<url>` entries written, homepage included
    pub entries: usize,

    /// Alternate links written, x-default included
    pub alternates: usize,

    /// Entries that received an x-default link
    pub x_defaults: usize,

    /// Pages skipped because their URL was already listed
    pub duplicates_skipped: usize,

    /// Entries listed without alternates because their content path could
    /// not be re-derived
    pub alternates_dropped: usize,
}

/// The sitemap of one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapDocument {
    /// `country_language_locale` of the locale the document belongs to
    pub sitemap_id: String,

    pub entries: Vec<UrlEntry>,

    pub stats: DocumentStats,
}

impl SitemapDocument {
    pub fn new(sitemap_id: impl Into<String>) -> Self {
        Self {
            sitemap_id: sitemap_id.into(),
            entries: Vec::new(),
            stats: DocumentStats::default(),
        }
    }

    pub fn push(&mut self, entry: UrlEntry) {
        self.stats.entries += 1;
        self.stats.alternates += entry.link_count();
        if entry.x_default.is_some() {
            self.stats.x_defaults += 1;
        }
        self.entries.push(entry);
    }

    pub fn entry(&self, loc: &str) -> Option<&UrlEntry> {
        self.entries.iter().find(|e| e.loc == loc)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One alternate relationship written to a sitemap, for the link audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// The alternate's target URL
    #[serde(rename = "URL")]
    pub url: String,

    /// Id of the sitemap the link was written to
    #[serde(rename = "Sitemap")]
    pub sitemap_id: String,

    #[serde(rename = "Hreflang")]
    pub hreflang: String,
}

impl LinkRecord {
    pub fn new(url: &str, sitemap_id: &str, hreflang: &str) -> Self {
        Self {
            url: url.to_string(),
            sitemap_id: sitemap_id.to_string(),
            hreflang: hreflang.to_string(),
        }
    }
}
