//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tscat commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (unfinished, empty, placeholders, duplicates)
//! - `stats`: Print completion statistics per catalog
//! - `merge`: Merge an extracted template into every catalog
//! - `release`: Write the compiled JSON form of every catalog
//! - `translate`: Look up a single string
//! - `init`: Initialize tscat configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;
use crate::context::ContextOptions;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.args.common.verbose,
            Some(Command::Release(cmd)) => cmd.args.common.verbose,
            Some(Command::Translate(_)) | Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands working on the catalogs root.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Catalogs directory path (overrides config file)
    #[arg(long)]
    pub catalogs_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn options(&self) -> ContextOptions {
        ContextOptions {
            catalogs_root: self.catalogs_root.clone(),
            verbose: self.verbose,
        }
    }
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Parser)]
pub struct MergeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog freshly extracted from the sources
    #[arg(long)]
    pub template: PathBuf,

    /// Actually write merged catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub args: MergeArgs,
}

#[derive(Debug, Parser)]
pub struct ReleaseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory for compiled files (default: next to each catalog)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ReleaseCommand {
    #[command(flatten)]
    pub args: ReleaseArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Catalog file (.ts) or compiled translations (.json)
    pub catalog: PathBuf,
    /// Context name, e.g. the command or dialog class
    pub context: String,
    /// Source text to look up
    pub source: String,
    /// Count used to select a plural form
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for unfinished, empty, mismatched or duplicate entries
    Check(CheckCommand),
    /// Print translation progress for every catalog
    Stats(StatsCommand),
    /// Merge an extracted template into every catalog
    Merge(MergeCommand),
    /// Compile catalogs into JSON lookup tables
    Release(ReleaseCommand),
    /// Translate a single string using a catalog
    Translate(TranslateCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
}
