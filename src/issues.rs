//! Issue types for catalog checks.
//!
//! Each issue is self-contained with everything the reporter needs to print
//! it: where it is, what is wrong, and optional notes.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Unfinished,
    EmptyTranslation,
    PlaceholderMismatch,
    DuplicateEntry,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::DuplicateEntry => write!(f, "duplicate-entry"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Entry Location
// ============================================================

/// Position of an entry inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CatalogLocation {
    pub file_path: String,
    /// Line of the entry's `<source>` element (1-indexed).
    pub line: usize,
}

impl CatalogLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// An entry as seen by the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    pub location: CatalogLocation,
    /// Context name of the entry.
    pub context: String,
    pub source: String,
    pub translation: String,
}

impl EntryContext {
    pub fn new(
        location: CatalogLocation,
        context: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context: context.into(),
            source: source.into(),
            translation: translation.into(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Entry still waiting for a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub entry: EntryContext,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Entry marked final with nothing in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub entry: EntryContext,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Final translation whose `%1`/`%n` markers differ from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub entry: EntryContext,
    /// Markers in the source but not in the translation.
    pub missing: Vec<String>,
    /// Markers in the translation but not in the source.
    pub unexpected: Vec<String>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// (context, source) pair defined more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntryIssue {
    pub entry: EntryContext,
    /// Line of the first definition.
    pub first_line: usize,
}

impl DuplicateEntryIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateEntry
    }
}

/// Catalog could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    EmptyTranslation(EmptyTranslationIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    DuplicateEntry(DuplicateEntryIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// An entry inside a catalog.
    Entry(&'a EntryContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the `Issue` enum
/// to them.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in context {}", self.entry.context))
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in context {}", self.entry.context))
    }

    fn hint(&self) -> Option<&str> {
        Some("translate the entry or mark it unfinished")
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        Some(format!("(\"{}\") {}", self.entry.translation, parts.join("; ")))
    }
}

impl Report for DuplicateEntryIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in context {}, first defined at line {}",
            self.entry.context, self.first_line
        ))
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tscat merge --apply` to fold duplicates")
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_key(&self) -> (&str, usize) {
        match self.location() {
            ReportLocation::Entry(entry) => (entry.location.file_path.as_str(), entry.location.line),
            ReportLocation::File { path } => (path, 0),
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}
