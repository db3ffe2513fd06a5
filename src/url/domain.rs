use url::Url;

/// Lowercased host of a crawled URL, without port
///
/// Crawl rows are kept only when this host is the site domain; URLs such as
/// `mailto:` links have no host and are always dropped.
///
/// ```
/// use url::Url;
/// use hreflang_sitemaps::url::extract_domain;
///
/// let url = Url::parse("https://WWW.Example.com:443/fr/fr/").unwrap();
/// assert_eq!(extract_domain(&url).as_deref(), Some("www.example.com"));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Checks if a host is the site's domain, with or without a `www.` prefix
///
/// # Arguments
///
/// * `site_domain` - The configured site domain (e.g., "example.com")
/// * `host` - The host to check
///
/// # Examples
///
/// ```
/// use hreflang_sitemaps::url::is_site_host;
///
/// assert!(is_site_host("example.com", "example.com"));
/// assert!(is_site_host("example.com", "WWW.Example.com"));
/// assert!(!is_site_host("example.com", "blog.example.com"));
/// ```
pub fn is_site_host(site_domain: &str, host: &str) -> bool {
    let host = host.to_lowercase();
    let site = site_domain.to_lowercase();
    let site = site.strip_prefix("www.").unwrap_or(&site);
    let host = host.strip_prefix("www.").unwrap_or(&host);
    host == site
}

/// Qualifies a possibly-relative crawl URL against the site domain
///
/// URLs that already mention the domain (in any case) or carry a scheme are
/// returned as they are; anything else is treated as a path on
/// `https://{domain}`.
///
/// # Examples
///
/// ```
/// use hreflang_sitemaps::url::qualify_url;
///
/// assert_eq!(qualify_url("/shoes", "example.com"), "https://example.com/shoes");
/// assert_eq!(qualify_url("shoes", "example.com"), "https://example.com/shoes");
/// assert_eq!(qualify_url("https://Example.com/a", "example.com"), "https://Example.com/a");
/// ```
pub fn qualify_url(url: &str, site_domain: &str) -> String {
    if url.contains("://") || url.to_lowercase().contains(&site_domain.to_lowercase()) {
        url.to_string()
    } else if url.starts_with('/') {
        format!("https://{}{}", site_domain, url)
    } else {
        format!("https://{}/{}", site_domain, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain_drops_port_and_case() {
        let url = Url::parse("https://Example.COM:8080/fr/fr/").unwrap();
        assert_eq!(extract_domain(&url).as_deref(), Some("example.com"));
    }

    #[test]
    fn test_extract_domain_hostless() {
        let url = Url::parse("mailto:shop@example.com").unwrap();
        assert_eq!(extract_domain(&url), None);
    }

    #[test]
    fn test_site_host_www_either_side() {
        assert!(is_site_host("www.example.com", "example.com"));
        assert!(is_site_host("example.com", "www.example.com"));
    }

    #[test]
    fn test_site_host_rejects_other_hosts() {
        assert!(!is_site_host("example.com", "example.org"));
        assert!(!is_site_host("example.com", "notexample.com"));
        assert!(!is_site_host("example.com", ""));
    }

    #[test]
    fn test_qualify_keeps_absolute_urls() {
        assert_eq!(
            qualify_url("http://www.example.com/x", "example.com"),
            "http://www.example.com/x"
        );
    }

    #[test]
    fn test_qualify_keeps_foreign_absolute_urls() {
        assert_eq!(
            qualify_url("https://other.com/shoes", "example.com"),
            "https://other.com/shoes"
        );
    }

    #[test]
    fn test_qualify_relative_urls() {
        assert_eq!(
            qualify_url("/fr/fr/shoes", "example.com"),
            "https://example.com/fr/fr/shoes"
        );
        assert_eq!(
            qualify_url("fr/fr/shoes", "example.com"),
            "https://example.com/fr/fr/shoes"
        );
    }
}
