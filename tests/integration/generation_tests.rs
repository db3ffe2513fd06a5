//! Integration tests for sitemap generation
//!
//! These tests write a configuration and both input datasets into a
//! temporary directory and run the full generation end-to-end.

use flate2::read::GzDecoder;
use hreflang_sitemaps::config::load_config_with_hash;
use hreflang_sitemaps::generator::{ProgressUpdate, Stage};
use hreflang_sitemaps::output::FsArtifactSink;
use hreflang_sitemaps::{Generator, SitemapError};
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

const DATE: &str = "20240131";

const HOMEPAGES: &str = "\
Homepage,Country,Language,Locale,Language Default
https://example.com/,US,EN,en_us,Y
https://example.com/fr/fr,FR,FR,fr_fr,N
https://example.com/de/de,DE,DE,de_de,N
";

const CRAWL: &str = "\
Address,Status Code,Indexability
https://example.com/,200,Indexable
https://example.com/shoes,200,Indexable
https://example.com/fr/fr/shoes,200,Indexable
https://example.com/fr/fr/,200,Indexable
/de/de/hats,200,Indexable
https://example.com/hats,200,Indexable
https://example.com/old,301,Non-Indexable
https://other.com/shoes,200,Indexable
";

/// Writes inputs and a config into `dir` and returns the config path
fn write_fixture(dir: &Path, homepages: &str, crawl: &str, extra: &str) -> std::path::PathBuf {
    fs::write(dir.join("homepages.csv"), homepages).unwrap();
    fs::write(dir.join("crawl.csv"), crawl).unwrap();

    let config = format!(
        r#"
[site]
domain = "example.com"

[input]
homepages-path = "{dir}/homepages.csv"
crawl-path = "{dir}/crawl.csv"

[output]
sitemap-dir = "{dir}/xml_sitemaps"
raw-sitemap-dir = "{dir}/raw_xml_sitemaps"
audit-dir = "{dir}/csv_output"
summary-path = "{dir}/summary.md"
{extra}
"#,
        dir = dir.display().to_string().replace('\\', "/"),
        extra = extra
    );
    let path = dir.join("sitemaps.toml");
    fs::write(&path, config).unwrap();
    path
}

fn run(config_path: &Path, dry_run: bool) -> Result<Vec<ProgressUpdate>, SitemapError> {
    let (config, hash) = load_config_with_hash(config_path).unwrap();
    let sink = FsArtifactSink::new(&config.output);
    let generator = Generator::new(config, hash, DATE);
    let mut updates: Vec<ProgressUpdate> = Vec::new();
    generator.run(&sink, &mut updates, dry_run)?;
    Ok(updates)
}

fn raw_sitemap(dir: &Path, stem: &str) -> String {
    fs::read_to_string(
        dir.join("raw_xml_sitemaps")
            .join(format!("sitemap_{}_{}.xml", DATE, stem)),
    )
    .unwrap()
}

#[test]
fn test_full_generation() {
    let dir = TempDir::new().unwrap();
    let config_path = write_fixture(dir.path(), HOMEPAGES, CRAWL, "");

    let updates = run(&config_path, false).unwrap();
    assert_eq!(updates.last().map(|u| u.stage), Some(Stage::Complete));

    for stem in ["us_en_en_us", "fr_fr_fr_fr", "de_de_de_de"] {
        assert!(dir
            .path()
            .join("xml_sitemaps")
            .join(format!("sitemap_{}_{}.xml.gz", DATE, stem))
            .exists());
    }
    assert!(dir
        .path()
        .join("csv_output")
        .join(format!("all_links_{}.csv", DATE))
        .exists());
    assert!(dir.path().join("summary.md").exists());

    let us = raw_sitemap(dir.path(), "us_en_en_us");
    assert!(us.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(us.contains("xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\""));
    assert!(us.contains("xmlns:xhtml=\"http://www.w3.org/1999/xhtml\""));
    assert!(us.contains("<loc>https://example.com/</loc>"));
    assert!(us.contains("<loc>https://example.com/shoes</loc>"));
    assert!(us.contains("<loc>https://example.com/hats</loc>"));
    assert!(!us.contains("<loc>https://example.com/fr/fr/shoes</loc>"));
    assert!(us.contains("hreflang=\"fr-fr\" href=\"https://example.com/fr/fr/shoes\""));
    assert!(us.contains("hreflang=\"de-de\" href=\"https://example.com/de/de/hats\""));
    assert!(!us.contains("https://example.com/de/de/shoes"));
    assert!(!us.contains("https://example.com/old"));
    assert!(!us.contains("other.com"));

    let fr = raw_sitemap(dir.path(), "fr_fr_fr_fr");
    assert!(fr.contains("<loc>https://example.com/fr/fr/</loc>"));
    assert!(fr.contains("<loc>https://example.com/fr/fr/shoes</loc>"));
    assert!(fr.contains("hreflang=\"x-default\" href=\"https://example.com/shoes\""));
    assert!(fr.contains("hreflang=\"en\" href=\"https://example.com/shoes\""));
    assert!(!fr.contains("<loc>https://example.com/hats</loc>"));
    assert_eq!(fr.matches("<loc>").count(), 2);
}

#[test]
fn test_gzip_matches_raw() {
    let dir = TempDir::new().unwrap();
    let config_path = write_fixture(dir.path(), HOMEPAGES, CRAWL, "");
    run(&config_path, false).unwrap();

    let gz = fs::read(
        dir.path()
            .join("xml_sitemaps")
            .join(format!("sitemap_{}_fr_fr_fr_fr.xml.gz", DATE)),
    )
    .unwrap();
    let mut decoded = String::new();
    GzDecoder::new(gz.as_slice())
        .read_to_string(&mut decoded)
        .unwrap();

    assert_eq!(decoded, raw_sitemap(dir.path(), "fr_fr_fr_fr"));
}

#[test]
fn test_audit_table() {
    let dir = TempDir::new().unwrap();
    let config_path = write_fixture(dir.path(), HOMEPAGES, CRAWL, "");
    run(&config_path, false).unwrap();

    let audit = fs::read_to_string(
        dir.path()
            .join("csv_output")
            .join(format!("all_links_{}.csv", DATE)),
    )
    .unwrap();
    let mut lines = audit.lines();
    assert_eq!(lines.next(), Some("URL,Sitemap,Hreflang"));

    let rows: Vec<&str> = lines.collect();
    assert!(rows.contains(&"https://example.com/fr/fr/shoes,us_en_en_us,fr-fr"));
    assert!(rows.contains(&"https://example.com/shoes,fr_fr_fr_fr,x-default"));

    // Every link written to a sitemap appears once in the audit
    let link_count: usize = ["us_en_en_us", "fr_fr_fr_fr", "de_de_de_de"]
        .iter()
        .map(|stem| raw_sitemap(dir.path(), stem).matches("<xhtml:link").count())
        .sum();
    assert_eq!(rows.len(), link_count);
}

#[test]
fn test_case_insensitive_alternates() {
    let dir = TempDir::new().unwrap();
    let crawl = "\
URL,Indexable
https://example.com/Shoes,yes
https://example.com/FR/FR/shoes,yes
";
    let config_path = write_fixture(dir.path(), HOMEPAGES, crawl, "");
    run(&config_path, false).unwrap();

    let us = raw_sitemap(dir.path(), "us_en_en_us");
    assert!(us.contains("<loc>https://example.com/Shoes</loc>"));
    assert!(us.contains("hreflang=\"fr-fr\" href=\"https://example.com/FR/FR/shoes\""));
}

#[test]
fn test_missing_columns_rejects_run() {
    let dir = TempDir::new().unwrap();
    let config_path = write_fixture(
        dir.path(),
        "Homepage,Country\nhttps://example.com,us\n",
        CRAWL,
        "",
    );

    let err = run(&config_path, false).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Required columns missing"));
    assert!(message.contains("Homepage, Country"));
    assert!(!dir.path().join("xml_sitemaps").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config_path = write_fixture(dir.path(), HOMEPAGES, CRAWL, "");

    run(&config_path, true).unwrap();

    assert!(!dir.path().join("xml_sitemaps").exists());
    assert!(!dir.path().join("raw_xml_sitemaps").exists());
    assert!(!dir.path().join("csv_output").exists());
    assert!(!dir.path().join("summary.md").exists());
}

#[test]
fn test_clean_output_removes_previous_files() {
    let dir = TempDir::new().unwrap();
    let config_path = write_fixture(dir.path(), HOMEPAGES, CRAWL, "");

    let stale_dir = dir.path().join("xml_sitemaps");
    fs::create_dir_all(&stale_dir).unwrap();
    fs::write(stale_dir.join("sitemap_20200101_us_en_en_us.xml.gz"), b"old").unwrap();

    run(&config_path, false).unwrap();
    assert!(!stale_dir.join("sitemap_20200101_us_en_en_us.xml.gz").exists());

    let keep_path = write_fixture(dir.path(), HOMEPAGES, CRAWL, "clean-output = false");
    fs::write(stale_dir.join("sitemap_20200101_us_en_en_us.xml.gz"), b"old").unwrap();
    run(&keep_path, false).unwrap();
    assert!(stale_dir.join("sitemap_20200101_us_en_en_us.xml.gz").exists());
}

#[test]
fn test_without_self_reference() {
    let dir = TempDir::new().unwrap();
    let config_path = write_fixture(
        dir.path(),
        HOMEPAGES,
        CRAWL,
        "\n[hreflang]\nself-reference = false\n",
    );
    run(&config_path, false).unwrap();

    let fr = raw_sitemap(dir.path(), "fr_fr_fr_fr");
    assert!(!fr.contains("hreflang=\"fr-fr\""));
    assert!(fr.contains("hreflang=\"en\""));
    assert!(fr.contains("hreflang=\"x-default\""));
}
