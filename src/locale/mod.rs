//! Locale module for the run's data model
//!
//! # Components
//!
//! - `Locale`: A country/language pair with its homepage and hreflang tag
//! - `LocaleSet`: All locales of a run, with default-locale resolution
//! - `Page`: A crawled indexable URL with its content path

mod page;
mod set;
mod types;

// Re-export main types
pub use page::Page;
pub use set::LocaleSet;
pub use types::Locale;
