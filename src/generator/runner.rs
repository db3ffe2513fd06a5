use crate::config::Config;
use crate::generator::progress::{ProgressSink, ProgressUpdate, Stage};
use crate::generator::{generate_with_progress, GenerateOptions, Generation};
use crate::input::{read_crawl, read_homepages};
use crate::output::{ArtifactSink, LocaleReport, RunReport};
use crate::sitemap::{audit_file_name, BuildOptions};
use crate::Result;

/// Runs a configured generation from input files to artifacts
pub struct Generator {
    config: Config,
    config_hash: String,
    date: String,
}

impl Generator {
    /// Creates a generator
    ///
    /// # Arguments
    ///
    /// * `config` - A validated configuration
    /// * `config_hash` - Hash of the configuration file, for the report
    /// * `date` - Date used in output file names (`YYYYMMDD`)
    pub fn new(config: Config, config_hash: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            config,
            config_hash: config_hash.into(),
            date: date.into(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Runs the generation
    ///
    /// Inputs are read and every sitemap is built before the sink is touched,
    /// so a rejected input leaves earlier output in place.
    ///
    /// # Arguments
    ///
    /// * `sink` - Where artifacts are written
    /// * `progress` - Receives stage updates
    /// * `dry_run` - Build everything but write nothing
    ///
    /// # Returns
    ///
    /// * `Ok(RunReport)` - What was read, built and written
    /// * `Err(SitemapError)` - An input was rejected or an artifact could not be written
    pub fn run(
        &self,
        sink: &dyn ArtifactSink,
        progress: &mut dyn ProgressSink,
        dry_run: bool,
    ) -> Result<RunReport> {
        let result = self.execute(sink, progress, dry_run);
        match &result {
            Ok(_) => progress.update(ProgressUpdate::new(Stage::Complete, 100)),
            Err(_) => progress.update(ProgressUpdate::new(Stage::Failed, 0)),
        }
        result
    }

    fn execute(
        &self,
        sink: &dyn ArtifactSink,
        progress: &mut dyn ProgressSink,
        dry_run: bool,
    ) -> Result<RunReport> {
        let mut report = RunReport::new(self.date.as_str(), self.config_hash.as_str());
        report.dry_run = dry_run;

        progress.update(ProgressUpdate::new(Stage::ReadingHomepages, 10));
        tracing::info!(
            "Reading homepages from {}",
            self.config.input.homepages_path.display()
        );
        let (locales, homepage_stats) = read_homepages(
            &self.config.input.homepages_path,
            self.config.hreflang.unprefixed_set(),
        )?;
        report.homepage_stats = homepage_stats;

        progress.update(ProgressUpdate::new(Stage::ReadingCrawl, 20));
        tracing::info!(
            "Reading crawl export from {}",
            self.config.input.crawl_path.display()
        );
        let (pages, crawl_stats) =
            read_crawl(&self.config.input.crawl_path, &self.config.site.domain)?;
        report.crawl_stats = crawl_stats;

        let options = GenerateOptions {
            date: self.date.clone(),
            build: BuildOptions {
                self_reference: self.config.hreflang.self_reference,
            },
        };
        let generation = generate_with_progress(&locales, &pages, &options, progress)?;
        record_generation(&mut report, &generation);

        if dry_run {
            tracing::info!("Dry run, nothing written");
        } else {
            progress.update(ProgressUpdate::new(Stage::Writing, 95));
            sink.prepare()?;
            report
                .files_written
                .extend(sink.write_sitemaps(&generation.compressed, &generation.raw)?);
            report
                .files_written
                .push(sink.write_audit(&audit_file_name(&self.date), &generation.links)?);
            tracing::info!("Wrote {} files", report.files_written.len());
        }

        report.finish();
        if !dry_run {
            if let Some(path) = sink.write_summary(&report)? {
                tracing::info!("Run report written to {}", path.display());
            }
        }

        Ok(report)
    }
}

fn record_generation(report: &mut RunReport, generation: &Generation) {
    report.default_locale = generation.mapping.default_locale.as_ref().map(|l| l.key());
    report.content_paths = generation.mapping.path_index.len();
    report.indexed_urls = generation.mapping.path_index.url_count();
    report.mapped_urls = generation.mapping.mapped_url_count();
    report.total_links = generation.links.len();
    report.locales = generation
        .sitemaps
        .iter()
        .map(|sitemap| LocaleReport {
            key: sitemap.locale.key(),
            file_name: sitemap.raw_name.clone(),
            stats: sitemap.document.stats,
        })
        .collect();
}
