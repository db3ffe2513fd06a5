use crate::url::UnprefixedSet;
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub hreflang: HreflangConfig,
}

/// The site the sitemaps are generated for
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site domain used to qualify relative crawl URLs (e.g., "example.com")
    pub domain: String,
}

/// Locations of the two input datasets
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the homepage dataset (one row per locale)
    #[serde(rename = "homepages-path")]
    pub homepages_path: PathBuf,

    /// Path to the crawl export (one row per crawled URL)
    #[serde(rename = "crawl-path")]
    pub crawl_path: PathBuf,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory for gzipped sitemaps
    #[serde(rename = "sitemap-dir")]
    pub sitemap_dir: PathBuf,

    /// Directory for uncompressed sitemaps
    #[serde(rename = "raw-sitemap-dir")]
    pub raw_sitemap_dir: PathBuf,

    /// Directory for the link audit CSV
    #[serde(rename = "audit-dir")]
    pub audit_dir: PathBuf,

    /// Path to the markdown run report, if one should be written
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<PathBuf>,

    /// Remove files left in the sitemap directories by earlier runs
    #[serde(rename = "clean-output", default = "default_true")]
    pub clean_output: bool,
}

/// Alternate-link policy
#[derive(Debug, Clone, Deserialize)]
pub struct HreflangConfig {
    /// Emit an alternate pointing at the entry's own locale
    #[serde(rename = "self-reference", default = "default_true")]
    pub self_reference: bool,

    /// Locales served from the bare site root, in priority order
    #[serde(default = "default_unprefixed")]
    pub unprefixed: Vec<LocaleEntry>,
}

impl Default for HreflangConfig {
    fn default() -> Self {
        Self {
            self_reference: true,
            unprefixed: default_unprefixed(),
        }
    }
}

impl HreflangConfig {
    pub fn unprefixed_set(&self) -> UnprefixedSet {
        UnprefixedSet::new(
            self.unprefixed
                .iter()
                .map(|e| (e.country.as_str(), e.language.as_str())),
        )
    }
}

/// A country/language pair
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleEntry {
    pub country: String,
    pub language: String,
}

fn default_true() -> bool {
    true
}

fn default_unprefixed() -> Vec<LocaleEntry> {
    vec![LocaleEntry {
        country: "us".to_string(),
        language: "en".to_string(),
    }]
}
