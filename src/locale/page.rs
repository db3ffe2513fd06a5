use crate::locale::Locale;
use crate::url::{extract_content_path, ContentPath};

/// A crawled, indexable page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The URL as crawled, case preserved
    pub url: String,

    /// Locale-independent identity of the page's content
    pub content_path: ContentPath,

    /// Whether this is a locale homepage
    pub is_homepage: bool,
}

impl Page {
    /// Creates a page from a crawled URL
    ///
    /// Returns None if no content path can be extracted. Pages at a site or
    /// locale root are flagged as homepages.
    pub fn from_url(url: &str) -> Option<Self> {
        let content_path = extract_content_path(url)?;
        Some(Self {
            url: url.to_string(),
            is_homepage: content_path.is_root(),
            content_path,
        })
    }

    /// The synthetic homepage entry of a locale
    pub fn homepage(locale: &Locale) -> Self {
        Self {
            url: locale.homepage_loc(),
            content_path: ContentPath::root(),
            is_homepage: true,
        }
    }

    /// A page placed in a locale's list under a known content path
    pub fn with_path(url: &str, content_path: ContentPath) -> Self {
        Self {
            url: url.to_string(),
            content_path,
            is_homepage: false,
        }
    }
}
