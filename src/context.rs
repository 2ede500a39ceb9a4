use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    catalog::Catalog,
    config::{CONFIG_FILE_NAME, Config, load_config},
    issues::ParseErrorIssue,
    rules::helpers::entry_lines,
    scanner::scan_catalogs,
};

/// A catalog together with where it was loaded from.
pub struct LoadedCatalog {
    /// Path as displayed in reports.
    pub file_path: String,
    pub path: PathBuf,
    pub catalog: Catalog,
    /// Line of each entry, in `Catalog::entries()` order.
    pub entry_lines: Vec<usize>,
}

/// Options shared by all commands that work on the catalogs root.
#[derive(Debug, Default, Clone)]
pub struct ContextOptions {
    /// Overrides `catalogsRoot` from the config file.
    pub catalogs_root: Option<PathBuf>,
    pub verbose: bool,
}

/// Loaded configuration and catalogs for one command run.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (`--catalogs-root`)
/// 2. `.tscatrc.json`
/// 3. Built-in defaults
pub struct CatalogContext {
    pub config: Config,
    pub catalogs_root: PathBuf,
    pub catalogs: Vec<LoadedCatalog>,
    pub parse_errors: Vec<ParseErrorIssue>,
    pub verbose: bool,
}

impl CatalogContext {
    pub fn new(start_dir: &Path, options: &ContextOptions) -> Result<Self> {
        let verbose = options.verbose;
        let config_result = load_config(start_dir)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(root) = &options.catalogs_root {
            config.catalogs_root = root.to_string_lossy().to_string();
        }

        let catalogs_root = start_dir.join(&config.catalogs_root);
        if !catalogs_root.is_dir() {
            bail!(
                "Catalogs directory not found: {}",
                Path::new(&config.catalogs_root).display()
            );
        }

        let scan = scan_catalogs(&catalogs_root, &config.ignores, verbose);
        if scan.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }
        if verbose && scan.ignored_count > 0 {
            eprintln!("Note: {} catalog(s) ignored by config", scan.ignored_count);
        }

        let results: Vec<Result<LoadedCatalog, ParseErrorIssue>> = scan
            .files
            .par_iter()
            .map(|path| load_catalog(start_dir, path))
            .collect();

        let mut catalogs = Vec::new();
        let mut parse_errors = Vec::new();
        for result in results {
            match result {
                Ok(loaded) => catalogs.push(loaded),
                Err(issue) => {
                    if verbose {
                        eprintln!("Warning: {} - {}", issue.file_path, issue.error);
                    }
                    parse_errors.push(issue);
                }
            }
        }

        Ok(Self {
            config,
            catalogs_root,
            catalogs,
            parse_errors,
            verbose,
        })
    }

    /// Number of catalog files found, including ones that failed to load.
    pub fn files_checked(&self) -> usize {
        self.catalogs.len() + self.parse_errors.len()
    }
}

fn load_catalog(start_dir: &Path, path: &Path) -> Result<LoadedCatalog, ParseErrorIssue> {
    let file_path = display_path(start_dir, path);
    let to_issue = |error: String| ParseErrorIssue {
        file_path: file_path.clone(),
        error,
    };

    let content = std::fs::read_to_string(path).map_err(|e| to_issue(e.to_string()))?;
    let catalog = Catalog::parse(&content).map_err(|e| to_issue(e.to_string()))?;

    Ok(LoadedCatalog {
        file_path: file_path.clone(),
        path: path.to_path_buf(),
        entry_lines: entry_lines(&content),
        catalog,
    })
}

/// Path relative to the working directory, with `/` separators.
fn display_path(start_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(start_dir).unwrap_or(path);
    let relative = relative.strip_prefix(".").unwrap_or(relative);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
