use crate::input::{describe_headers, find_column, prepare, reader, InputStats, RowError};
use crate::locale::{Locale, LocaleSet};
use crate::url::UnprefixedSet;
use crate::{InputError, InputResult};
use std::path::Path;

const HOMEPAGE_COLUMNS: &[&str] = &["homepage", "url", "address"];
const COUNTRY_COLUMNS: &[&str] = &["country", "country code"];
const LANGUAGE_COLUMNS: &[&str] = &["language", "language code"];
const LOCALE_COLUMNS: &[&str] = &["locale", "language tag"];
const DEFAULT_COLUMNS: &[&str] = &["language default", "is default", "default"];

const INPUT_NAME: &str = "homepage dataset";

/// Column positions of the homepage dataset
struct Columns {
    homepage: usize,
    country: usize,
    language: usize,
    locale: Option<usize>,
    default: Option<usize>,
}

/// Reads the homepage dataset from a file
pub fn read_homepages(
    path: &Path,
    unprefixed: UnprefixedSet,
) -> InputResult<(LocaleSet, InputStats)> {
    let content = std::fs::read_to_string(path)?;
    parse_homepages(&content, unprefixed)
}

/// Parses the homepage dataset
///
/// Header names are matched case-insensitively:
///
/// | Field    | Accepted headers                          | Required |
/// |----------|-------------------------------------------|----------|
/// | Homepage | homepage, url, address                    | yes      |
/// | Country  | country, country code                     | yes      |
/// | Language | language, language code                   | yes      |
/// | Locale   | locale, language tag                      | no       |
/// | Default  | language default, is default, default     | no       |
///
/// # Returns
///
/// * `Ok((LocaleSet, InputStats))` - The locales in file order and row counters
/// * `Err(InputError)` - The file has no header, or a required column is missing
pub fn parse_homepages(
    content: &str,
    unprefixed: UnprefixedSet,
) -> InputResult<(LocaleSet, InputStats)> {
    let (delimiter, body) = prepare(content);
    let mut rdr = reader(delimiter, body);
    let mut records = rdr.records();

    let headers = match records.next() {
        Some(headers) => headers?,
        None => {
            return Err(InputError::Empty {
                input: INPUT_NAME.to_string(),
            })
        }
    };
    let columns = resolve_columns(&headers)?;

    let mut locales = LocaleSet::new(unprefixed);
    let mut stats = InputStats::default();

    for result in records {
        stats.rows_read += 1;
        let parsed = result
            .map_err(|e| RowError::Malformed(e.to_string()))
            .and_then(|record| parse_row(&record, &columns));

        match parsed {
            Ok(locale) => {
                stats.rows_kept += 1;
                if let Some(replaced) = locales.insert(locale) {
                    tracing::warn!(
                        "Locale {} listed more than once, replacing {}",
                        replaced.key(),
                        replaced.homepage
                    );
                }
            }
            Err(e) => {
                tracing::debug!("Skipping homepage row {}: {}", stats.rows_read, e);
                stats.record_skip(&e);
            }
        }
    }

    tracing::info!(
        "Read {} locales from {} homepage rows ({} skipped)",
        locales.len(),
        stats.rows_read,
        stats.rows_skipped()
    );
    Ok((locales, stats))
}

fn resolve_columns(headers: &csv::StringRecord) -> InputResult<Columns> {
    let lower = |h: &str| h.trim().to_lowercase();

    let homepage = find_column(headers, HOMEPAGE_COLUMNS, lower);
    let country = find_column(headers, COUNTRY_COLUMNS, lower);
    let language = find_column(headers, LANGUAGE_COLUMNS, lower);

    match (homepage, country, language) {
        (Some(homepage), Some(country), Some(language)) => Ok(Columns {
            homepage,
            country,
            language,
            locale: find_column(headers, LOCALE_COLUMNS, lower),
            default: find_column(headers, DEFAULT_COLUMNS, lower),
        }),
        _ => Err(InputError::MissingColumns {
            input: INPUT_NAME.to_string(),
            required: "Homepage/URL, Country, and Language".to_string(),
            found: describe_headers(headers),
        }),
    }
}

fn parse_row(record: &csv::StringRecord, columns: &Columns) -> Result<Locale, RowError> {
    let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or_default();

    let homepage = field(columns.homepage);
    if homepage.is_empty() {
        return Err(RowError::MissingField("homepage"));
    }
    let country = field(columns.country);
    if country.is_empty() {
        return Err(RowError::MissingField("country"));
    }
    let language = field(columns.language);
    if language.is_empty() {
        return Err(RowError::MissingField("language"));
    }

    ::url::Url::parse(homepage).map_err(|e| RowError::InvalidUrl {
        url: homepage.to_string(),
        reason: e.to_string(),
    })?;

    let locale = columns.locale.map(field);
    let is_default = columns.default.map(field).is_some_and(is_default_flag);

    Ok(Locale::new(homepage, country, language, locale, is_default))
}

/// Default-column values that mark a locale as the default
fn is_default_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}
