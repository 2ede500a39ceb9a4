use super::{CommandResult, CommandSummary};
use crate::{
    context::CatalogContext,
    issues::{Issue, Severity},
};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    catalogs_checked: usize,
    entries_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        catalogs_checked,
        entries_checked,
    }
}

/// Finish a command over the catalogs root, reporting load failures as issues.
pub fn finish_with_context(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    ctx: &CatalogContext,
    exit_on_errors: bool,
) -> CommandResult {
    issues.extend(ctx.parse_errors.iter().cloned().map(Issue::ParseError));
    let entries_checked = ctx.catalogs.iter().map(|c| c.catalog.entry_count()).sum();
    finish(
        summary,
        issues,
        ctx.files_checked(),
        entries_checked,
        exit_on_errors,
    )
}
