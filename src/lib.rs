//! hreflang-sitemaps: localized XML sitemaps with hreflang alternates
//!
//! This crate reads a list of per-locale homepages and a crawl export of a
//! site's indexable pages, works out which locale every page belongs to and
//! which pages are renditions of the same content, and writes one sitemap per
//! locale whose entries link to every other locale's equivalent page.

pub mod config;
pub mod generator;
pub mod input;
pub mod locale;
pub mod mapping;
pub mod output;
pub mod sitemap;
pub mod url;

use thiserror::Error;

/// Main error type for sitemap generation
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),
}

/// Errors that reject a whole tabular input before any output is produced
#[derive(Debug, Error)]
pub enum InputError {
    #[error(
        "Required columns missing in {input}. Need {required} columns. Found columns: {found}"
    )]
    MissingColumns {
        input: String,
        required: String,
        found: String,
    },

    #[error("{input} has no header line")]
    Empty { input: String },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for sitemap generation
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for input parsing
pub type InputResult<T> = std::result::Result<T, InputError>;

// Re-export commonly used types
pub use config::Config;
pub use generator::{generate, Generation, Generator};
pub use locale::{Locale, LocaleSet, Page};
pub use mapping::{build_mapping, LocaleMapping, PathIndex};
pub use sitemap::{build_document, LinkRecord, SitemapDocument};
pub use self::url::{
    belongs_to_region, extract_content_path, normalize_key, ContentPath, RegionRule,
};
