//! Report formatting and printing utilities.
//!
//! This module prints issues in cargo-style format and renders the output of
//! the non-check commands. Separate from core logic to allow tscat to be used
//! as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, MergeSummary, ReleaseSummary, StatsSummary,
};
use crate::catalog::CatalogStats;
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format.
///
/// Issues are displayed with severity, rule, location and notes, followed by
/// a one-line summary.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(catalogs: usize, entries: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} {}, {} {} - no issues found",
        catalogs,
        if catalogs == 1 { "catalog" } else { "catalogs" },
        entries,
        if entries == 1 { "entry" } else { "entries" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about catalogs that could not be loaded.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} catalog(s) could not be loaded (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line) = extract_location_info(&loc);

    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    match line {
        Some(line) => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), file_path, line);
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn extract_location_info<'a>(loc: &'a ReportLocation<'a>) -> (&'a str, Option<usize>) {
    match loc {
        ReportLocation::Entry(entry) => (entry.location.file_path.as_str(), Some(entry.location.line)),
        ReportLocation::File { path } => (*path, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Entry(entry) => Some(entry.location.line),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, &mut io::stdout().lock());
    print_parse_warning(result.parse_error_count, verbose);
}

fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check => {
            report_to(&result.issues, writer);
            if result.issues.is_empty() {
                print_success_to(result.catalogs_checked, result.entries_checked, writer);
            }
        }
        CommandSummary::Stats(summary) => {
            print_stats(summary, writer);
            report_to(&result.issues, writer);
        }
        CommandSummary::Merge(summary) => {
            print_merge(summary, writer);
            report_to(&result.issues, writer);
        }
        CommandSummary::Release(summary) => {
            print_release(summary, writer);
            report_to(&result.issues, writer);
        }
        CommandSummary::Translate(summary) => {
            let _ = writeln!(writer, "{}", summary.text);
        }
        CommandSummary::Init(summary) => {
            print_init(summary, writer);
        }
    }
}

// ============================================================
// Command Output
// ============================================================

const STATS_HEADERS: [&str; 6] = ["Catalog", "Lang", "Finished", "Unfinished", "Obsolete", "Done"];

fn stats_cells(name: &str, language: &str, stats: &CatalogStats) -> [String; 6] {
    [
        name.to_string(),
        language.to_string(),
        stats.finished.to_string(),
        stats.unfinished.to_string(),
        stats.obsolete.to_string(),
        format!("{:.1}%", stats.completion()),
    ]
}

/// Pad to a display width; catalog names may contain wide characters.
fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right_align {
        format!("{}{}", fill, cell)
    } else {
        format!("{}{}", cell, fill)
    }
}

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.rows.is_empty() {
        let _ = writeln!(writer, "No catalogs found.");
        return;
    }

    let mut table: Vec<[String; 6]> = summary
        .rows
        .iter()
        .map(|row| stats_cells(&row.file_path, &row.language, &row.stats))
        .collect();
    table.push(stats_cells("Total", "", &summary.total));

    let mut widths = STATS_HEADERS.map(|header| header.width());
    for cells in &table {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.as_str().width());
        }
    }

    let format_row = |cells: &[&str]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i], i >= 2))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(writer, "{}", format_row(&STATS_HEADERS[..]).bold());
    let last = table.len() - 1;
    for (i, cells) in table.iter().enumerate() {
        let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        let line = format_row(refs.as_slice());
        if i == last {
            let _ = writeln!(writer, "{}", line.bold());
        } else {
            let _ = writeln!(writer, "{}", line);
        }
    }
}

fn print_merge<W: Write>(summary: &MergeSummary, writer: &mut W) {
    for row in summary.rows.iter().filter(|row| row.changed) {
        let stats = &row.stats;
        let _ = writeln!(
            writer,
            "{}: {} kept, {} added, {} obsoleted, {} revived, {} duplicate(s) folded",
            row.file_path,
            stats.kept,
            stats.added,
            stats.obsoleted,
            stats.revived,
            stats.duplicates_folded
        );
    }

    if summary.file_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All catalogs are up to date".green()
        );
    } else if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} catalog(s).",
            "Updated".green().bold(),
            summary.file_count
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} catalog(s).",
            "Would update".yellow().bold(),
            summary.file_count
        );
        let _ = writeln!(writer, "Run with {} to write these changes.", "--apply".cyan());
    }
}

fn print_release<W: Write>(summary: &ReleaseSummary, writer: &mut W) {
    for row in &summary.rows {
        let _ = writeln!(writer, "Updating '{}'...", row.output_path);
        let _ = writeln!(
            writer,
            "    Generated {} translation(s) ({} finished and {} unfinished)",
            row.generated, row.stats.finished, row.stats.unfinished
        );
        let skipped = row.stats.unfinished;
        if skipped > 0 {
            let _ = writeln!(
                writer,
                "    Ignored {} untranslated source text(s)",
                skipped
            );
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
        }
        None => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
    }
}
