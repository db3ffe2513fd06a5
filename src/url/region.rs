use crate::url::{normalize_key, ContentPath};
use regex::Regex;
use std::sync::LazyLock;

/// A `/xx/xx` locale segment, either followed by a slash or ending the URL.
static LOCALE_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/[a-z]{2}/[a-z]{2}(?:/|$)").expect("locale segment pattern is valid")
});

/// Country/language pairs whose pages live at the bare site root
///
/// Every other locale's pages live under `/{country}/{language}/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnprefixedSet {
    entries: Vec<(String, String)>,
}

impl UnprefixedSet {
    /// Creates a set from `(country, language)` pairs, in priority order
    pub fn new<I, C, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        C: AsRef<str>,
        L: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(c, l)| (c.as_ref().to_lowercase(), l.as_ref().to_lowercase()))
                .collect(),
        }
    }

    pub fn contains(&self, country: &str, language: &str) -> bool {
        self.position(country, language).is_some()
    }

    /// Priority of a pair within the set, lower is higher priority
    pub fn position(&self, country: &str, language: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(c, l)| c.eq_ignore_ascii_case(country) && l.eq_ignore_ascii_case(language))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for UnprefixedSet {
    fn default() -> Self {
        Self::new([("us", "en")])
    }
}

/// Decides which URLs are a locale's rendition of some content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionRule {
    /// Pages live at the bare site root; any URL carrying a `/xx/xx/` segment
    /// right after the root belongs to some other locale.
    Unprefixed { root: String },

    /// Pages live under `{root}/{country}/{language}/`.
    Prefixed {
        root: String,
        country: String,
        language: String,
    },
}

impl RegionRule {
    /// Builds the rule for a locale
    ///
    /// # Arguments
    ///
    /// * `base_url` - The locale's homepage; a trailing `/{country}/{language}`
    ///   is removed to find the site root
    /// * `country` - Two-letter country code
    /// * `language` - Two-letter language code
    /// * `unprefixed` - The locales served from the bare site root
    pub fn for_locale(
        base_url: &str,
        country: &str,
        language: &str,
        unprefixed: &UnprefixedSet,
    ) -> Self {
        let root = site_root(base_url, country, language);
        if unprefixed.contains(country, language) {
            Self::Unprefixed { root }
        } else {
            Self::Prefixed {
                root,
                country: country.to_lowercase(),
                language: language.to_lowercase(),
            }
        }
    }

    pub fn is_unprefixed(&self) -> bool {
        matches!(self, Self::Unprefixed { .. })
    }

    /// Returns true if the URL belongs to this rule's locale
    ///
    /// Both sides are compared as normalized keys.
    pub fn matches(&self, url: &str) -> bool {
        let key = normalize_key(url);
        match self {
            Self::Unprefixed { root } => match key.strip_prefix(root.as_str()) {
                Some(rest) => !LOCALE_SEGMENT_RE.is_match(rest),
                None => false,
            },
            Self::Prefixed { .. } => key.starts_with(&self.prefix()),
        }
    }

    /// The URL this locale would use for a content path
    ///
    /// Only meaningful for comparison: it is built from the normalized root,
    /// so it must be matched against crawled URLs by normalized key.
    pub fn expected_url(&self, path: &ContentPath) -> String {
        match self {
            Self::Unprefixed { root } => format!("{}/{}", root, path.as_str()),
            Self::Prefixed { .. } => format!("{}{}", self.prefix(), path.as_str()),
        }
    }

    fn prefix(&self) -> String {
        match self {
            Self::Unprefixed { root } => format!("{}/", root),
            Self::Prefixed {
                root,
                country,
                language,
            } => format!("{}/{}/{}/", root, country, language),
        }
    }
}

/// Finds the site root behind a locale homepage
///
/// Removes a trailing `/{country}/{language}` (in any case) so that a homepage
/// listed as `https://example.com/fr/fr` and one listed as
/// `https://example.com` both yield `https://example.com`. The result is a
/// normalized key.
pub fn site_root(base_url: &str, country: &str, language: &str) -> String {
    let key = normalize_key(base_url);
    let suffix = format!("/{}/{}", country.to_lowercase(), language.to_lowercase());
    match key.strip_suffix(&suffix) {
        Some(root) if !root.ends_with(':') && !root.ends_with('/') => root.to_string(),
        _ => key,
    }
}

/// Checks if a URL belongs to a locale
///
/// Convenience wrapper that builds the locale's [`RegionRule`] and applies it.
///
/// # Examples
///
/// ```
/// use hreflang_sitemaps::url::{belongs_to_region, UnprefixedSet};
///
/// let unprefixed = UnprefixedSet::default();
/// let base = "https://example.com";
///
/// assert!(belongs_to_region("https://example.com/shoes", base, "us", "en", &unprefixed));
/// assert!(!belongs_to_region("https://example.com/fr/fr/shoes", base, "us", "en", &unprefixed));
/// assert!(belongs_to_region("https://example.com/FR/FR/Shoes", base, "fr", "fr", &unprefixed));
/// ```
pub fn belongs_to_region(
    url: &str,
    base_url: &str,
    country: &str,
    language: &str,
    unprefixed: &UnprefixedSet,
) -> bool {
    RegionRule::for_locale(base_url, country, language, unprefixed).matches(url)
}
