use crate::config::types::{
    Config, HreflangConfig, InputConfig, LocaleEntry, OutputConfig, SiteConfig,
};
use crate::ConfigError;
use std::path::Path;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    validate_hreflang_config(&config.hreflang)?;
    Ok(())
}

/// Validates the site domain
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.domain.contains("://") {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' must not include a scheme",
            config.domain
        )));
    }
    validate_domain_string(&config.domain)
}

/// Validates input paths
fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    require_path(&config.homepages_path, "homepages_path")?;
    require_path(&config.crawl_path, "crawl_path")?;
    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    require_path(&config.sitemap_dir, "sitemap_dir")?;
    require_path(&config.raw_sitemap_dir, "raw_sitemap_dir")?;
    require_path(&config.audit_dir, "audit_dir")?;

    if let Some(summary) = &config.summary_path {
        require_path(summary, "summary_path")?;
    }

    if config.sitemap_dir == config.raw_sitemap_dir {
        return Err(ConfigError::Validation(
            "sitemap_dir and raw_sitemap_dir must be different directories".to_string(),
        ));
    }

    Ok(())
}

/// Validates the unprefixed locale list
fn validate_hreflang_config(config: &HreflangConfig) -> Result<(), ConfigError> {
    if config.unprefixed.is_empty() {
        return Err(ConfigError::Validation(
            "At least one unprefixed locale is required".to_string(),
        ));
    }

    for entry in &config.unprefixed {
        validate_locale_entry(entry)?;
    }

    Ok(())
}

fn validate_locale_entry(entry: &LocaleEntry) -> Result<(), ConfigError> {
    for (name, code) in [("country", &entry.country), ("language", &entry.language)] {
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Validation(format!(
                "Unprefixed locale {} must be two ASCII letters, got '{}'",
                name, code
            )));
        }
    }
    Ok(())
}

fn require_path(path: &Path, name: &str) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
    }
    Ok(())
}

/// Validates a domain string
fn validate_domain_string(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::InvalidPattern(
            "Domain cannot be empty".to_string(),
        ));
    }

    // Check for invalid characters
    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' contains invalid characters",
            domain
        )));
    }

    // Check that it doesn't start or end with a dot or hyphen
    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' cannot start or end with '.' or '-'",
            domain
        )));
    }

    if domain.contains("..") {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' cannot contain consecutive dots",
            domain
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::InvalidPattern(format!(
            "Domain '{}' must contain at least one dot (e.g., 'example.com')",
            domain
        )));
    }

    Ok(())
}
