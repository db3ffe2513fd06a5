//! Sitemap module
//!
//! This module handles:
//! - Building one hreflang-annotated document per locale
//! - Recording every alternate written, for the link audit
//! - Rendering documents to XML and gzip

mod builder;
mod document;
pub mod xml;

pub use builder::{build_document, BuildOptions};
pub use document::{Alternate, DocumentStats, LinkRecord, SitemapDocument, UrlEntry, X_DEFAULT};

use crate::locale::Locale;

/// File name stem of a locale's sitemap: `sitemap_{date}_{country}_{language}_{locale}`
pub fn file_stem(date: &str, locale: &Locale) -> String {
    format!(
        "sitemap_{}_{}_{}_{}",
        date, locale.country, locale.language, locale.locale
    )
}

/// Name of the uncompressed sitemap file
pub fn raw_file_name(date: &str, locale: &Locale) -> String {
    format!("{}.xml", file_stem(date, locale))
}

/// Name of the gzipped sitemap file
pub fn compressed_file_name(date: &str, locale: &Locale) -> String {
    format!("{}.xml.gz", file_stem(date, locale))
}

/// Name of the link audit file
pub fn audit_file_name(date: &str) -> String {
    format!("all_links_{}.csv", date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let locale = Locale::new("https://example.com/fr/fr", "FR", "fr", None, false);
        assert_eq!(
            raw_file_name("20240131", &locale),
            "sitemap_20240131_fr_fr_fr_fr.xml"
        );
        assert_eq!(
            compressed_file_name("20240131", &locale),
            "sitemap_20240131_fr_fr_fr_fr.xml.gz"
        );
        assert_eq!(audit_file_name("20240131"), "all_links_20240131.csv");
    }
}
