//! URL handling module
//!
//! This module provides the textual URL machinery the locale mapping is built
//! on: comparison keys, content-path extraction, region rules and the domain
//! helpers used to qualify crawl rows.

mod domain;
mod normalize;
mod path;
mod region;

// Re-export main functions
pub use domain::{extract_domain, is_site_host, qualify_url};
pub use normalize::normalize_key;
pub use path::{extract_content_path, ContentPath};
pub use region::{belongs_to_region, site_root, RegionRule, UnprefixedSet};
