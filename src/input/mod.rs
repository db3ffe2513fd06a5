//! Tabular input module
//!
//! This module reads the two datasets a run starts from:
//! - The homepage dataset, one row per locale
//! - The crawl export, one row per crawled URL with its indexability
//!
//! Column names are matched loosely, an Excel `sep=` first line is honoured,
//! and rows that cannot be used are skipped and counted rather than failing
//! the run. Only a missing required column rejects a whole dataset.

mod crawl;
mod homepages;

pub use crawl::{parse_crawl, read_crawl};
pub use homepages::{parse_homepages, read_homepages};

use std::collections::BTreeMap;
use thiserror::Error;

/// Reasons a single row is skipped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row is missing its {0} value")]
    MissingField(&'static str),

    #[error("row is not indexable ({0:?})")]
    NotIndexable(String),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("URL '{0}' is not on the site domain")]
    OffDomain(String),

    #[error("no content path in URL '{0}'")]
    NoContentPath(String),

    #[error("malformed row: {0}")]
    Malformed(String),
}

impl RowError {
    /// Short name used to group skipped rows in statistics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing field",
            Self::NotIndexable(_) => "not indexable",
            Self::InvalidUrl { .. } => "invalid url",
            Self::OffDomain(_) => "off domain",
            Self::NoContentPath(_) => "no content path",
            Self::Malformed(_) => "malformed",
        }
    }
}

/// Row counters for one dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputStats {
    /// Data rows read, header excluded
    pub rows_read: usize,

    /// Rows turned into records
    pub rows_kept: usize,

    /// Skipped rows by reason
    pub skipped: BTreeMap<&'static str, usize>,
}

impl InputStats {
    pub fn rows_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    fn record_skip(&mut self, error: &RowError) {
        *self.skipped.entry(error.kind()).or_insert(0) += 1;
    }
}

/// Splits off an Excel `sep=<c>` line and a byte-order mark
///
/// Returns the delimiter to use and the remaining text.
fn prepare(content: &str) -> (u8, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let first_line = content.lines().next().unwrap_or_default();

    match first_line.trim().strip_prefix("sep=") {
        Some(sep) => {
            let delimiter = sep.bytes().next().unwrap_or(b',');
            let rest = content
                .split_once('\n')
                .map(|(_, rest)| rest)
                .unwrap_or_default();
            (delimiter, rest)
        }
        None => (b',', content),
    }
}

/// Builds a headerless, flexible CSV reader over prepared text
fn reader(delimiter: u8, body: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes())
}

/// Finds the first header whose normalized name is one of `candidates`
fn find_column<F>(headers: &csv::StringRecord, candidates: &[&str], normalize: F) -> Option<usize>
where
    F: Fn(&str) -> String,
{
    headers
        .iter()
        .position(|h| candidates.contains(&normalize(h).as_str()))
}

fn describe_headers(headers: &csv::StringRecord) -> String {
    headers.iter().map(str::trim).collect::<Vec<_>>().join(", ")
}
