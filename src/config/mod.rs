//! Configuration module
//!
//! This module handles loading, parsing, and validating the TOML run
//! configuration: the site domain, input and output locations, and the
//! alternate-link policy.
//!
//! # Example
//!
//! ```no_run
//! use hreflang_sitemaps::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemaps.toml")).unwrap();
//! println!("Sitemaps go to {}", config.output.sitemap_dir.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HreflangConfig, InputConfig, LocaleEntry, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
