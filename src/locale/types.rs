use crate::url::{RegionRule, UnprefixedSet};

/// A country/language pair with its homepage
///
/// Locales are read once from the homepage dataset and never change during a
/// run. All codes are stored lowercase; the homepage keeps its original case
/// but loses any trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Homepage URL without trailing slash
    pub homepage: String,

    /// Two-letter country code
    pub country: String,

    /// Two-letter language code
    pub language: String,

    /// Locale tag used in file names and sitemap ids (e.g., "en_us")
    pub locale: String,

    /// Whether this locale is the x-default target
    pub is_default: bool,
}

impl Locale {
    /// Creates a locale, lowercasing codes and trimming the homepage
    ///
    /// When no locale tag is given it defaults to `{language}_{country}`.
    pub fn new(
        homepage: &str,
        country: &str,
        language: &str,
        locale: Option<&str>,
        is_default: bool,
    ) -> Self {
        let country = country.trim().to_lowercase();
        let language = language.trim().to_lowercase();
        let locale = match locale.map(str::trim) {
            Some(tag) if !tag.is_empty() => tag.to_lowercase(),
            _ => format!("{}_{}", language, country),
        };

        Self {
            homepage: homepage.trim().trim_end_matches('/').to_string(),
            country,
            language,
            locale,
            is_default,
        }
    }

    /// Key the locale is stored under: `language-country`, or the bare
    /// language for the default locale
    pub fn key(&self) -> String {
        if self.is_default {
            self.language.clone()
        } else {
            format!("{}-{}", self.language, self.country)
        }
    }

    /// Value of `hreflang` attributes pointing at this locale
    pub fn hreflang(&self) -> String {
        self.key()
    }

    /// The homepage as listed in sitemaps, with a trailing slash
    pub fn homepage_loc(&self) -> String {
        format!("{}/", self.homepage)
    }

    /// Identifier recorded in the link audit for documents of this locale
    pub fn sitemap_id(&self) -> String {
        format!("{}_{}_{}", self.country, self.language, self.locale)
    }

    /// The region rule for this locale
    pub fn region_rule(&self, unprefixed: &UnprefixedSet) -> RegionRule {
        RegionRule::for_locale(&self.homepage, &self.country, &self.language, unprefixed)
    }
}
