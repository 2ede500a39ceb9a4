use std::path::PathBuf;

use crate::{
    catalog::{CatalogStats, MergeStats},
    issues::Issue,
};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Merge(MergeSummary),
    Release(ReleaseSummary),
    Translate(TranslateSummary),
    Init(InitSummary),
}

/// One row of the `stats` table.
#[derive(Debug, Clone)]
pub struct StatsRow {
    pub file_path: String,
    pub language: String,
    pub stats: CatalogStats,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub rows: Vec<StatsRow>,
    pub total: CatalogStats,
}

#[derive(Debug, Clone)]
pub struct MergeRow {
    pub file_path: String,
    pub stats: MergeStats,
    /// The merged catalog differs from the one on disk.
    pub changed: bool,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub rows: Vec<MergeRow>,
    /// Catalogs that changed (or would change).
    pub file_count: usize,
    pub is_apply: bool,
}

#[derive(Debug, Clone)]
pub struct ReleaseRow {
    pub output_path: String,
    pub stats: CatalogStats,
    /// Entries written to the compiled form.
    pub generated: usize,
}

#[derive(Debug)]
pub struct ReleaseSummary {
    pub rows: Vec<ReleaseRow>,
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub text: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Result of running tscat commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found during the run, including catalogs that failed to load.
    pub issues: Vec<Issue>,
    /// Number of catalogs that failed to load.
    pub parse_error_count: usize,
    /// Number of catalog files that were examined.
    pub catalogs_checked: usize,
    /// Number of entries across all loaded catalogs.
    pub entries_checked: usize,
}
