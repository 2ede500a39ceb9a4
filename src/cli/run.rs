/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with error/warning counts and exit behavior
/// - `Err` if the command fails (e.g., unreadable template, bad config)
use std::path::Path;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{
        check::check, init::init, merge::merge, release::release, stats::stats,
        translate::translate,
    },
};

pub fn run(Arguments { command }: Arguments, start_dir: &Path) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd, start_dir),
        Some(Command::Stats(cmd)) => stats(cmd, start_dir),
        Some(Command::Merge(cmd)) => merge(cmd, start_dir),
        Some(Command::Release(cmd)) => release(cmd, start_dir),
        Some(Command::Translate(cmd)) => translate(cmd, start_dir),
        Some(Command::Init) => init(start_dir),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
