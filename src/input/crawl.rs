use crate::input::{describe_headers, find_column, prepare, reader, InputStats, RowError};
use crate::locale::Page;
use crate::url::{extract_domain, is_site_host, qualify_url};
use crate::InputResult;
use std::path::Path;

const URL_COLUMNS: &[&str] = &["fullurl", "address", "url"];
const INDEXABLE_COLUMNS: &[&str] = &["isindexable", "indexability", "indexable"];
const INDEXABLE_VALUES: &[&str] = &["true", "indexable", "yes", "y", "1"];

/// Header lines are recognised by any of these words
const HEADER_HINTS: &[&str] = &["url", "address", "full"];

/// Reads the crawl export from a file
pub fn read_crawl(path: &Path, domain: &str) -> InputResult<(Vec<Page>, InputStats)> {
    let content = std::fs::read_to_string(path)?;
    parse_crawl(&content, domain)
}

/// Parses the crawl export into indexable pages
///
/// A first line mentioning `url`, `address` or `full` is a header; its columns
/// are matched with spaces removed and case ignored against
/// `fullurl|address|url` and `isindexable|indexability|indexable`. Without a
/// usable header the first two columns are taken as URL and indexability.
///
/// Rows are kept when their indexability is `true`, `indexable`, `yes`, `y`
/// or `1`. Relative URLs are qualified with `https://{domain}`, and URLs on
/// other hosts are dropped.
///
/// # Arguments
///
/// * `content` - The export's text
/// * `domain` - The site domain (e.g., "example.com")
///
/// # Returns
///
/// The pages in file order with row counters. Row problems never fail the
/// parse; only malformed CSV framing at the header does.
pub fn parse_crawl(content: &str, domain: &str) -> InputResult<(Vec<Page>, InputStats)> {
    let (delimiter, body) = prepare(content);
    let first_line = body.lines().next().unwrap_or_default().to_lowercase();
    let has_headers = HEADER_HINTS.iter().any(|hint| first_line.contains(hint));

    let mut rdr = reader(delimiter, body);
    let mut records = rdr.records();

    // A first line that looked like a header but matched no column is data
    let mut first_row = None;
    let (url_column, indexable_column) = match records.next() {
        Some(first) if has_headers => {
            let first = first?;
            match header_columns(&first) {
                Some(columns) => columns,
                None => {
                    first_row = Some(Ok(first));
                    (0, 1)
                }
            }
        }
        Some(first) => {
            first_row = Some(first.map_err(|e| RowError::Malformed(e.to_string())));
            (0, 1)
        }
        None => (0, 1),
    };

    let mut pages = Vec::new();
    let mut stats = InputStats::default();

    let rows = first_row
        .into_iter()
        .chain(records.map(|r| r.map_err(|e| RowError::Malformed(e.to_string()))));

    for result in rows {
        stats.rows_read += 1;
        let parsed =
            result.and_then(|record| parse_row(&record, url_column, indexable_column, domain));

        match parsed {
            Ok(page) => {
                stats.rows_kept += 1;
                pages.push(page);
            }
            Err(e) => {
                tracing::debug!("Skipping crawl row {}: {}", stats.rows_read, e);
                stats.record_skip(&e);
            }
        }
    }

    tracing::info!(
        "Read {} indexable pages from {} crawl rows ({} skipped)",
        pages.len(),
        stats.rows_read,
        stats.rows_skipped()
    );
    Ok((pages, stats))
}

/// Column positions named by a header line, if it names both columns
fn header_columns(headers: &csv::StringRecord) -> Option<(usize, usize)> {
    let squash = |h: &str| h.trim().to_lowercase().replace(' ', "");

    match (
        find_column(headers, URL_COLUMNS, squash),
        find_column(headers, INDEXABLE_COLUMNS, squash),
    ) {
        (Some(url), Some(indexable)) => Some((url, indexable)),
        _ => {
            tracing::warn!(
                "Crawl header not recognised ({}), reading it as data with the first two columns",
                describe_headers(headers)
            );
            None
        }
    }
}

fn parse_row(
    record: &csv::StringRecord,
    url_column: usize,
    indexable_column: usize,
    domain: &str,
) -> Result<Page, RowError> {
    let url = record
        .get(url_column)
        .map(str::trim)
        .ok_or(RowError::MissingField("url"))?;
    let indexability = record
        .get(indexable_column)
        .map(|v| v.trim().to_lowercase())
        .ok_or(RowError::MissingField("indexability"))?;

    if !INDEXABLE_VALUES.contains(&indexability.as_str()) {
        return Err(RowError::NotIndexable(indexability));
    }
    if url.is_empty() {
        return Err(RowError::MissingField("url"));
    }

    let qualified = qualify_url(url, domain);
    let parsed = ::url::Url::parse(&qualified).map_err(|e| RowError::InvalidUrl {
        url: qualified.clone(),
        reason: e.to_string(),
    })?;

    match extract_domain(&parsed) {
        Some(host) if is_site_host(domain, &host) => {}
        _ => return Err(RowError::OffDomain(qualified)),
    }

    Page::from_url(&qualified).ok_or(RowError::NoContentPath(qualified))
}
