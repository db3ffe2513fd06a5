use crate::locale::Locale;
use crate::url::{RegionRule, UnprefixedSet};
use indexmap::IndexMap;

/// The locales of one generation run, in homepage-dataset order
///
/// Locales are keyed by [`Locale::key`]. Inserting a locale whose key is
/// already present replaces the earlier one but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct LocaleSet {
    locales: IndexMap<String, Locale>,
    unprefixed: UnprefixedSet,
}

impl LocaleSet {
    /// Creates an empty set using the given unprefixed locales
    pub fn new(unprefixed: UnprefixedSet) -> Self {
        Self {
            locales: IndexMap::new(),
            unprefixed,
        }
    }

    /// Creates a set from locales, later duplicates replacing earlier ones
    pub fn from_locales<I>(locales: I, unprefixed: UnprefixedSet) -> Self
    where
        I: IntoIterator<Item = Locale>,
    {
        let mut set = Self::new(unprefixed);
        for locale in locales {
            set.insert(locale);
        }
        set
    }

    /// Adds a locale, returning the one it replaced if its key was taken
    pub fn insert(&mut self, locale: Locale) -> Option<Locale> {
        self.locales.insert(locale.key(), locale)
    }

    pub fn get(&self, key: &str) -> Option<&Locale> {
        self.locales.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Locale> {
        self.locales.values()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn unprefixed(&self) -> &UnprefixedSet {
        &self.unprefixed
    }

    /// The region rule of a locale in this set
    pub fn rule(&self, locale: &Locale) -> RegionRule {
        locale.region_rule(&self.unprefixed)
    }

    /// Resolves the x-default locale
    ///
    /// The first locale flagged as default wins. Without a flagged locale,
    /// the unprefixed locale with the highest priority is used. Returns None
    /// if neither exists.
    pub fn default_locale(&self) -> Option<&Locale> {
        if let Some(flagged) = self.iter().find(|l| l.is_default) {
            return Some(flagged);
        }

        self.iter()
            .filter_map(|l| {
                self.unprefixed
                    .position(&l.country, &l.language)
                    .map(|rank| (rank, l))
            })
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, l)| l)
    }
}
