//! Command-line interface layer.
//!
//! Parses arguments, runs the selected command against the working directory
//! and prints its report.

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let start_dir = std::env::current_dir()?;
    let result = run::run(args, &start_dir)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from_result(&result))
}
