//! Artifact sink trait and output errors
//!
//! A run produces three kinds of artifacts: the sitemaps (gzipped and raw),
//! the link audit table and an optional run report. Where they end up is the
//! sink's business.

use crate::output::report::RunReport;
use crate::sitemap::LinkRecord;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// File name to file content
pub type Artifacts = BTreeMap<String, Vec<u8>>;

/// Trait for artifact sinks
///
/// Each method returns the locations it wrote, for the run report.
pub trait ArtifactSink {
    /// Readies the sink before anything is written
    fn prepare(&self) -> OutputResult<()> {
        Ok(())
    }

    /// Writes the gzipped and raw sitemaps
    ///
    /// # Arguments
    ///
    /// * `compressed` - `.xml.gz` file name to gzipped bytes
    /// * `raw` - `.xml` file name to XML bytes
    fn write_sitemaps(
        &self,
        compressed: &Artifacts,
        raw: &Artifacts,
    ) -> OutputResult<Vec<PathBuf>>;

    /// Writes the link audit table
    ///
    /// # Arguments
    ///
    /// * `name` - File name of the audit table
    /// * `links` - Every link written to any sitemap, in emission order
    fn write_audit(&self, name: &str, links: &[LinkRecord]) -> OutputResult<PathBuf>;

    /// Writes the run report, if the sink keeps one
    fn write_summary(&self, report: &RunReport) -> OutputResult<Option<PathBuf>>;
}
