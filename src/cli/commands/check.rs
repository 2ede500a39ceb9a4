use std::path::Path;

use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish_with_context};

use crate::{
    context::CatalogContext,
    issues::Issue,
    rules::{
        duplicate::check_duplicate_issues, empty::check_empty_translation_issues,
        placeholder::check_placeholder_issues, unfinished::check_unfinished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Unfinished,
    EmptyTranslation,
    PlaceholderMismatch,
    DuplicateEntry,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::EmptyTranslation,
            CheckRule::PlaceholderMismatch,
            CheckRule::DuplicateEntry,
        ]
    }
}

pub fn check(cmd: CheckCommand, start_dir: &Path) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CatalogContext::new(start_dir, &args.common.options())?;

    // An explicitly requested rule runs even if disabled in the config.
    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
            .into_iter()
            .filter(|rule| {
                *rule != CheckRule::PlaceholderMismatch || ctx.config.check_placeholders
            })
            .collect()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(&ctx.catalogs);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::EmptyTranslation => {
                let issues = check_empty_translation_issues(&ctx.catalogs);
                all_issues.extend(issues.into_iter().map(Issue::EmptyTranslation));
            }
            CheckRule::PlaceholderMismatch => {
                let issues = check_placeholder_issues(&ctx.catalogs);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::DuplicateEntry => {
                let issues = check_duplicate_issues(&ctx.catalogs);
                all_issues.extend(issues.into_iter().map(Issue::DuplicateEntry));
            }
        }
    }

    Ok(finish_with_context(
        CommandSummary::Check,
        all_issues,
        &ctx,
        true,
    ))
}
