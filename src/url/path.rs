use crate::url::normalize_key;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Scheme, optional `www.`, host, then an optional `xx/xx` or `xx-xx` locale
/// segment which is discarded. Whatever follows is the content path.
static CONTENT_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^https?://(?:www\.)?[^/]+",
        r"(?:/(?:[a-z]{2}/[a-z]{2}(?:/|$)|[a-z]{2}-[a-z]{2}(?:/|$))?(.*))?$",
    ))
        .expect("content path pattern is valid")
});

/// The locale-independent identity of a page
///
/// Stored without its leading slash and in normalized (lowercase) form, so
/// `https://example.com/FR/FR/Shoes` and `https://example.com/shoes` share the
/// content path `shoes`. The site root is the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentPath(String);

impl ContentPath {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        match path.strip_prefix('/') {
            Some(rest) => Self(rest.to_string()),
            None => Self(path),
        }
    }

    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path without a leading slash, as joined onto a site root
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path with its leading slash (`/` for the root)
    pub fn route(&self) -> String {
        format!("/{}", self.0)
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

/// Extracts the content path from a URL
///
/// The URL is normalized first, then any leading two-letter/two-letter locale
/// segment (`/fr/fr/` or `/fr-fr/`) is stripped. The segment is not checked
/// against the known locales: any pair of two-letter segments is treated as a
/// locale prefix.
///
/// # Arguments
///
/// * `url` - The URL to extract the content path from
///
/// # Returns
///
/// * `Some(ContentPath)` - The content path (the root for bare homepages)
/// * `None` - If the URL has no `http(s)://host` shape
///
/// # Examples
///
/// ```
/// use hreflang_sitemaps::url::extract_content_path;
///
/// let path = extract_content_path("https://www.example.com/fr/fr/Shoes/").unwrap();
/// assert_eq!(path.route(), "/shoes");
///
/// let path = extract_content_path("https://example.com/de-at/shoes").unwrap();
/// assert_eq!(path.as_str(), "shoes");
///
/// assert!(extract_content_path("/relative/path").is_none());
/// ```
pub fn extract_content_path(url: &str) -> Option<ContentPath> {
    let key = normalize_key(url);
    let captures = CONTENT_PATH_RE.captures(&key)?;
    let rest = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    Some(ContentPath::new(rest))
}
