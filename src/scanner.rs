use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::CATALOG_EXTENSION;

/// Result of scanning for catalog files.
pub struct ScanResult {
    /// Catalog files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Paths that could not be read.
    pub skipped_count: usize,
    /// Catalogs excluded by an ignore pattern.
    pub ignored_count: usize,
}

/// Recursively collect `*.ts` catalogs under `root`.
///
/// `ignore_patterns` are globs matched against the path relative to `root`.
pub fn scan_catalogs(root: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;
    let mut ignored_count = 0;

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                skipped_count += 1;
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(CATALOG_EXTENSION)
        {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if patterns.iter().any(|p| p.matches_path(relative)) {
            ignored_count += 1;
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    ScanResult {
        files,
        skipped_count,
        ignored_count,
    }
}
