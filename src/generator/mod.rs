//! Generation run
//!
//! `generate` is the in-memory run: it maps pages onto locales, builds one
//! sitemap per locale and renders them. [`Generator`] wraps it with input
//! reading and artifact writing.

mod progress;
mod runner;

pub use progress::{LogProgress, ProgressSink, ProgressUpdate, Stage};
pub use runner::Generator;

use crate::locale::{Locale, LocaleSet, Page};
use crate::mapping::{build_mapping, LocaleMapping};
use crate::output::Artifacts;
use crate::sitemap::{self, build_document, xml, BuildOptions, LinkRecord, SitemapDocument};
use crate::Result;

/// Options of one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Date used in file names (`YYYYMMDD`)
    pub date: String,

    pub build: BuildOptions,
}

impl GenerateOptions {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            build: BuildOptions::default(),
        }
    }
}

/// A locale's finished sitemap
#[derive(Debug, Clone)]
pub struct BuiltSitemap {
    pub locale: Locale,
    pub raw_name: String,
    pub compressed_name: String,
    pub document: SitemapDocument,
}

/// Everything a run produces, before it is written anywhere
#[derive(Debug, Clone)]
pub struct Generation {
    /// The page-to-locale mapping the sitemaps were built from
    pub mapping: LocaleMapping,

    /// One sitemap per locale, in locale order
    pub sitemaps: Vec<BuiltSitemap>,

    /// `.xml.gz` file name to gzipped bytes
    pub compressed: Artifacts,

    /// `.xml` file name to XML bytes
    pub raw: Artifacts,

    /// Every link written, in emission order
    pub links: Vec<LinkRecord>,
}

/// Runs the engine over already-read inputs
pub fn generate(
    locales: &LocaleSet,
    pages: &[Page],
    options: &GenerateOptions,
) -> Result<Generation> {
    generate_with_progress(locales, pages, options, &mut Vec::<ProgressUpdate>::new())
}

/// Runs the engine, reporting progress as sitemaps are built
///
/// # Arguments
///
/// * `locales` - The run's locales, in output order
/// * `pages` - Crawled, indexable pages
/// * `options` - File date and alternate options
/// * `progress` - Receives mapping and per-sitemap updates
///
/// # Returns
///
/// * `Ok(Generation)` - Documents, rendered files and the audit list
/// * `Err(SitemapError)` - A document could not be rendered
pub fn generate_with_progress(
    locales: &LocaleSet,
    pages: &[Page],
    options: &GenerateOptions,
    progress: &mut dyn ProgressSink,
) -> Result<Generation> {
    progress.update(ProgressUpdate::new(Stage::Mapping, 30));
    let mapping = build_mapping(locales, pages);
    tracing::info!(
        "Mapped {} pages over {} content paths to {} locales",
        mapping.mapped_page_count(),
        mapping.path_index.len(),
        locales.len()
    );

    let mut generation = Generation {
        sitemaps: Vec::with_capacity(locales.len()),
        compressed: Artifacts::new(),
        raw: Artifacts::new(),
        links: Vec::new(),
        mapping: LocaleMapping::default(),
    };

    let total = locales.len();
    progress.update(ProgressUpdate::building(0, total));

    for (done, locale) in locales.iter().enumerate() {
        let (document, links) = build_document(
            locale,
            mapping.pages_for(locale),
            locales,
            &mapping.path_index,
            mapping.default_locale.as_ref(),
            &options.build,
        );

        let rendered = xml::render(&document)?;
        let compressed = xml::compress(&rendered)?;

        let raw_name = sitemap::raw_file_name(&options.date, locale);
        let compressed_name = sitemap::compressed_file_name(&options.date, locale);
        generation.raw.insert(raw_name.clone(), rendered);
        generation.compressed.insert(compressed_name.clone(), compressed);
        generation.links.extend(links);
        generation.sitemaps.push(BuiltSitemap {
            locale: locale.clone(),
            raw_name,
            compressed_name,
            document,
        });

        progress.update(ProgressUpdate::building(done + 1, total));
    }

    generation.mapping = mapping;
    Ok(generation)
}
