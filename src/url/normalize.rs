/// Normalizes a URL into a comparison key
///
/// # Normalization Steps
///
/// 1. Lowercase the whole URL (scheme, host, path and query)
/// 2. Remove a single trailing slash
/// 3. If a query string is present, keep only its first parameter
///
/// The key is purely textual: any string is accepted, including strings that
/// are not URLs at all. Keys are only ever compared with each other; the
/// original URL is what gets written to sitemaps.
///
/// # Arguments
///
/// * `url` - The URL string to normalize
///
/// # Returns
///
/// The normalized comparison key
///
/// # Examples
///
/// ```
/// use hreflang_sitemaps::url::normalize_key;
///
/// let key = normalize_key("https://Example.com/FR/fr/Shoes/");
/// assert_eq!(key, "https://example.com/fr/fr/shoes");
///
/// let key = normalize_key("https://example.com/search?q=a&page=2");
/// assert_eq!(key, "https://example.com/search?q=a");
/// ```
pub fn normalize_key(url: &str) -> String {
    let lowered = url.to_lowercase();
    let trimmed = lowered.strip_suffix('/').unwrap_or(&lowered);

    match trimmed.split_once('?') {
        Some((base, query)) => {
            let first_param = query.split('&').next().unwrap_or_default();
            format!("{}?{}", base, first_param)
        }
        None => trimmed.to_string(),
    }
}
