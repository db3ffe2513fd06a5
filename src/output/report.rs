//! Run report
//!
//! Aggregates what a run read, built and wrote, and prints it to stdout.

use crate::input::InputStats;
use crate::sitemap::DocumentStats;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// What was built for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleReport {
    /// Locale key, also its hreflang value
    pub key: String,

    /// Sitemap file name (uncompressed)
    pub file_name: String,

    pub stats: DocumentStats,
}

/// Summary of one generation run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Date used in the output file names (`YYYYMMDD`)
    pub date: String,

    /// SHA-256 of the configuration file
    pub config_hash: String,

    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Nothing was written
    pub dry_run: bool,

    pub homepage_stats: InputStats,
    pub crawl_stats: InputStats,

    /// Key of the x-default locale
    pub default_locale: Option<String>,

    /// Distinct content paths in the path index
    pub content_paths: usize,

    /// Distinct crawled URLs in the path index
    pub indexed_urls: usize,

    /// Distinct indexed URLs placed in at least one locale
    pub mapped_urls: usize,

    /// One report per locale, in output order
    pub locales: Vec<LocaleReport>,

    /// Rows in the link audit table
    pub total_links: usize,

    pub files_written: Vec<PathBuf>,
}

impl RunReport {
    /// Creates an empty report for a run starting now
    pub fn new(date: impl Into<String>, config_hash: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            config_hash: config_hash.into(),
            started_at: Utc::now(),
            finished_at: None,
            dry_run: false,
            homepage_stats: InputStats::default(),
            crawl_stats: InputStats::default(),
            default_locale: None,
            content_paths: 0,
            indexed_urls: 0,
            mapped_urls: 0,
            locales: Vec::new(),
            total_links: 0,
            files_written: Vec::new(),
        }
    }

    /// Marks the run finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds() as f64 / 1000.0)
    }

    /// `<url>` entries across all sitemaps
    pub fn total_entries(&self) -> usize {
        self.locales.iter().map(|l| l.stats.entries).sum()
    }

    /// Alternate links across all sitemaps, x-default included
    pub fn total_alternates(&self) -> usize {
        self.locales.iter().map(|l| l.stats.alternates).sum()
    }

    /// Entries listed without alternates
    pub fn total_alternates_dropped(&self) -> usize {
        self.locales.iter().map(|l| l.stats.alternates_dropped).sum()
    }

    /// Indexed URLs that ended up in no sitemap
    pub fn unmapped_urls(&self) -> usize {
        self.indexed_urls.saturating_sub(self.mapped_urls)
    }
}

/// Prints the report to stdout in a formatted manner
pub fn print_report(report: &RunReport) {
    println!("=== Sitemap Generation ===\n");

    println!("Run:");
    println!("  Date: {}", report.date);
    println!("  Config hash: {}", report.config_hash);
    if let Some(duration) = report.duration_seconds() {
        println!("  Duration: {:.2}s", duration);
    }
    if report.dry_run {
        println!("  Dry run: nothing written");
    }
    println!();

    println!("Inputs:");
    print_input("Homepage rows", &report.homepage_stats);
    print_input("Crawl rows", &report.crawl_stats);
    println!(
        "  Indexed: {} URLs over {} content paths",
        report.indexed_urls, report.content_paths
    );
    println!();

    println!("Sitemaps ({}):", report.locales.len());
    for locale in &report.locales {
        println!(
            "  {:<8} {} entries, {} alternates  {}",
            locale.key, locale.stats.entries, locale.stats.alternates, locale.file_name
        );
    }
    println!();

    match &report.default_locale {
        Some(key) => println!("x-default: {}", key),
        None => println!("x-default: none (no default locale)"),
    }
    println!(
        "Totals: {} entries, {} alternates, {} audit rows",
        report.total_entries(),
        report.total_alternates(),
        report.total_links
    );

    let dropped = report.total_alternates_dropped();
    if dropped > 0 {
        println!("Entries without alternates: {}", dropped);
    }

    if !report.files_written.is_empty() {
        println!("\nFiles written: {}", report.files_written.len());
    }
}

fn print_input(label: &str, stats: &InputStats) {
    println!(
        "  {}: {} read, {} kept, {} skipped",
        label,
        stats.rows_read,
        stats.rows_kept,
        stats.rows_skipped()
    );
    for (reason, count) in &stats.skipped {
        println!("    - {}: {}", reason, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale_report(key: &str, entries: usize, alternates: usize) -> LocaleReport {
        LocaleReport {
            key: key.to_string(),
            file_name: format!("sitemap_{}.xml", key),
            stats: DocumentStats {
                entries,
                alternates,
                ..DocumentStats::default()
            },
        }
    }

    #[test]
    fn test_report_new() {
        let report = RunReport::new("20240131", "abc");
        assert_eq!(report.date, "20240131");
        assert!(report.finished_at.is_none());
        assert!(report.duration_seconds().is_none());
        assert_eq!(report.total_entries(), 0);
    }

    #[test]
    fn test_totals() {
        let mut report = RunReport::new("20240131", "abc");
        report.locales.push(locale_report("en", 3, 6));
        report.locales.push(locale_report("fr-fr", 2, 4));

        assert_eq!(report.total_entries(), 5);
        assert_eq!(report.total_alternates(), 10);
    }

    #[test]
    fn test_unmapped_urls() {
        let mut report = RunReport::new("20240131", "abc");
        report.indexed_urls = 5;
        report.mapped_urls = 3;
        // Entry counts play no part: a URL may sit in several sitemaps
        report.locales.push(locale_report("en", 4, 0));
        report.locales.push(locale_report("en-ca", 4, 0));

        assert_eq!(report.unmapped_urls(), 2);
    }

    #[test]
    fn test_finish_sets_duration() {
        let mut report = RunReport::new("20240131", "abc");
        report.finish();
        assert!(report.duration_seconds().unwrap() >= 0.0);
    }
}
