//! Markdown run report
//!
//! This module renders a run report as a markdown document covering the
//! inputs, the per-locale sitemaps and the files written.

use crate::input::InputStats;
use crate::output::report::RunReport;
use crate::output::traits::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the markdown report to a file
///
/// # Arguments
///
/// * `report` - The run report
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to write the report
pub fn write_markdown_report(report: &RunReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_report(report);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a run report as markdown
pub fn format_markdown_report(report: &RunReport) -> String {
    let mut md = String::new();

    md.push_str("# Hreflang Sitemap Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Date**: {}\n", report.date));
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    if let Some(finished) = &report.finished_at {
        md.push_str(&format!("- **Finished**: {}\n", finished.to_rfc3339()));
    }
    if let Some(duration) = report.duration_seconds() {
        md.push_str(&format!("- **Duration**: {:.2} seconds\n", duration));
    }
    md.push_str(&format!("- **Config Hash**: {}\n", report.config_hash));
    if report.dry_run {
        md.push_str("- **Dry Run**: yes\n");
    }
    md.push('\n');

    // Inputs
    md.push_str("## Inputs\n\n");
    md.push_str("| Dataset | Read | Kept | Skipped |\n");
    md.push_str("|---------|------|------|---------|\n");
    push_input_row(&mut md, "Homepages", &report.homepage_stats);
    push_input_row(&mut md, "Crawl", &report.crawl_stats);
    md.push('\n');

    let skipped: Vec<_> = report
        .homepage_stats
        .skipped
        .iter()
        .map(|(reason, count)| ("Homepages", reason, count))
        .chain(
            report
                .crawl_stats
                .skipped
                .iter()
                .map(|(reason, count)| ("Crawl", reason, count)),
        )
        .collect();
    if !skipped.is_empty() {
        md.push_str("### Skipped Rows\n\n");
        md.push_str("| Dataset | Reason | Rows |\n");
        md.push_str("|---------|--------|------|\n");
        for (dataset, reason, count) in skipped {
            md.push_str(&format!("| {} | {} | {} |\n", dataset, reason, count));
        }
        md.push('\n');
    }

    // Mapping
    md.push_str("## Mapping\n\n");
    md.push_str(&format!(
        "- **Default Locale**: {}\n",
        report.default_locale.as_deref().unwrap_or("none")
    ));
    md.push_str(&format!("- **Content Paths**: {}\n", report.content_paths));
    md.push_str(&format!("- **Indexed URLs**: {}\n", report.indexed_urls));
    md.push_str(&format!("- **Unmapped URLs**: {}\n\n", report.unmapped_urls()));

    // Sitemaps
    md.push_str("## Sitemaps\n\n");
    md.push_str(concat!(
        "| Hreflang | File | Entries | Alternates | x-default | Duplicates | No Alternates |\n",
        "|----------|------|---------|------------|-----------|------------|---------------|\n",
    ));
    for locale in &report.locales {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            locale.key,
            locale.file_name,
            locale.stats.entries,
            locale.stats.alternates,
            locale.stats.x_defaults,
            locale.stats.duplicates_skipped,
            locale.stats.alternates_dropped
        ));
    }
    md.push_str(&format!(
        "| **Total** | | {} | {} | | | {} |\n\n",
        report.total_entries(),
        report.total_alternates(),
        report.total_alternates_dropped()
    ));
    md.push_str(&format!("Audit rows: {}\n\n", report.total_links));

    // Files
    if !report.files_written.is_empty() {
        md.push_str("## Files Written\n\n");
        for path in &report.files_written {
            md.push_str(&format!("- `{}`\n", path.display()));
        }
        md.push('\n');
    }

    md
}

fn push_input_row(md: &mut String, name: &str, stats: &InputStats) {
    md.push_str(&format!(
        "| {} | {} | {} | {} |\n",
        name,
        stats.rows_read,
        stats.rows_kept,
        stats.rows_skipped()
    ));
}
