//! Output module for run artifacts and reports
//!
//! This module handles:
//! - Writing sitemaps, the link audit table and the run report
//! - Aggregating run statistics into a report
//! - Rendering the report for stdout and as markdown

mod audit;
mod fs_sink;
mod markdown;
mod report;
mod traits;

pub use audit::write_audit;
pub use fs_sink::FsArtifactSink;
pub use markdown::{format_markdown_report, write_markdown_report};
pub use report::{print_report, LocaleReport, RunReport};
pub use traits::{ArtifactSink, Artifacts, OutputError, OutputResult};
