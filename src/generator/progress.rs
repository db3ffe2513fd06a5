//! Run progress
//!
//! Progress is passed to the run as an explicit sink so concurrent runs never
//! share it.

use std::fmt;

/// Stage of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ReadingHomepages,
    ReadingCrawl,
    Mapping,
    Building,
    Writing,
    Complete,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Stage::ReadingHomepages => "Parsing homepage data",
            Stage::ReadingCrawl => "Parsing internal pages",
            Stage::Mapping => "Mapping pages to locales",
            Stage::Building => "Generating sitemaps",
            Stage::Writing => "Writing output",
            Stage::Complete => "Complete",
            Stage::Failed => "Error",
        };
        f.write_str(status)
    }
}

/// A progress notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub stage: Stage,

    /// 0 to 100
    pub percentage: u8,
}

impl ProgressUpdate {
    pub fn new(stage: Stage, percentage: u8) -> Self {
        Self {
            stage,
            percentage: percentage.min(100),
        }
    }

    /// Progress while building the `done`-th of `total` sitemaps
    ///
    /// Building spans 40% to 90% of the run.
    pub fn building(done: usize, total: usize) -> Self {
        let share = if total == 0 { 50 } else { done * 50 / total };
        Self::new(Stage::Building, 40 + share.min(50) as u8)
    }
}

/// Receives progress updates from a run
pub trait ProgressSink {
    fn update(&mut self, update: ProgressUpdate);
}

/// Logs progress with `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn update(&mut self, update: ProgressUpdate) {
        match update.stage {
            Stage::Failed => tracing::error!("{} ({}%)", update.stage, update.percentage),
            Stage::Building => tracing::debug!("{} ({}%)", update.stage, update.percentage),
            _ => tracing::info!("{} ({}%)", update.stage, update.percentage),
        }
    }
}

/// Records every update
impl ProgressSink for Vec<ProgressUpdate> {
    fn update(&mut self, update: ProgressUpdate) {
        self.push(update);
    }
}
