//! Filesystem artifact sink

use crate::config::OutputConfig;
use crate::output::audit::write_audit;
use crate::output::markdown::write_markdown_report;
use crate::output::report::RunReport;
use crate::output::traits::{ArtifactSink, Artifacts, OutputError, OutputResult};
use crate::sitemap::LinkRecord;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Writes artifacts into the configured output directories
#[derive(Debug, Clone)]
pub struct FsArtifactSink {
    sitemap_dir: PathBuf,
    raw_sitemap_dir: PathBuf,
    audit_dir: PathBuf,
    summary_path: Option<PathBuf>,
    clean: bool,
}

impl FsArtifactSink {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            sitemap_dir: config.sitemap_dir.clone(),
            raw_sitemap_dir: config.raw_sitemap_dir.clone(),
            audit_dir: config.audit_dir.clone(),
            summary_path: config.summary_path.clone(),
            clean: config.clean_output,
        }
    }
}

impl ArtifactSink for FsArtifactSink {
    /// Creates the output directories and, with `clean-output`, removes
    /// sitemaps left by earlier runs
    ///
    /// Only plain files directly inside the two sitemap directories are
    /// removed. The audit directory is never cleared.
    fn prepare(&self) -> OutputResult<()> {
        fs::create_dir_all(&self.audit_dir)?;
        for dir in [&self.sitemap_dir, &self.raw_sitemap_dir] {
            fs::create_dir_all(dir)?;
            if self.clean {
                let removed = clear_files(dir)?;
                if removed > 0 {
                    tracing::info!("Removed {} old files from {}", removed, dir.display());
                }
            }
        }
        Ok(())
    }

    fn write_sitemaps(
        &self,
        compressed: &Artifacts,
        raw: &Artifacts,
    ) -> OutputResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(compressed.len() + raw.len());
        for (dir, files) in [(&self.sitemap_dir, compressed), (&self.raw_sitemap_dir, raw)] {
            for (name, bytes) in files {
                let path = artifact_path(dir, name)?;
                fs::write(&path, bytes)?;
                tracing::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());
                written.push(path);
            }
        }
        Ok(written)
    }

    fn write_audit(&self, name: &str, links: &[LinkRecord]) -> OutputResult<PathBuf> {
        let path = artifact_path(&self.audit_dir, name)?;
        let file = File::create(&path)?;
        write_audit(BufWriter::new(file), links)?;
        tracing::debug!("Wrote {} audit rows to {}", links.len(), path.display());
        Ok(path)
    }

    fn write_summary(&self, report: &RunReport) -> OutputResult<Option<PathBuf>> {
        match &self.summary_path {
            Some(path) => {
                write_markdown_report(report, path)?;
                Ok(Some(path.clone()))
            }
            None => Ok(None),
        }
    }
}

/// Joins a bare file name onto a directory
fn artifact_path(dir: &Path, name: &str) -> OutputResult<PathBuf> {
    let is_bare = Path::new(name)
        .file_name()
        .is_some_and(|file_name| file_name == name);
    if !is_bare {
        return Err(OutputError::Write(format!(
            "'{}' is not a plain file name",
            name
        )));
    }
    Ok(dir.join(name))
}

fn clear_files(dir: &Path) -> OutputResult<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    Ok(removed)
}
