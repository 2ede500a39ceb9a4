//! Placeholder mismatch detection rule.
//!
//! Qt substitutes `%1`..`%99` and `%n` (optionally localized as `%L1`, `%Ln`)
//! at runtime. A final translation must use the same markers as its source,
//! otherwise arguments are silently dropped or printed literally.

use std::{collections::BTreeSet, fmt, sync::LazyLock};

use regex::Regex;

use crate::{
    catalog::Entry, context::LoadedCatalog, issues::PlaceholderMismatchIssue,
};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?(n|[1-9][0-9]?)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Placeholder {
    Arg(u8),
    Count,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Arg(n) => write!(f, "%{}", n),
            Placeholder::Count => write!(f, "%n"),
        }
    }
}

/// Markers used in `text`; `%L1` counts as `%1`.
pub fn placeholders(text: &str) -> BTreeSet<Placeholder> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let marker = caps.get(1)?.as_str();
            if marker == "n" {
                Some(Placeholder::Count)
            } else {
                marker.parse().ok().map(Placeholder::Arg)
            }
        })
        .collect()
}

pub fn check_placeholder_issues(catalogs: &[LoadedCatalog]) -> Vec<PlaceholderMismatchIssue> {
    catalogs.iter().flat_map(check_placeholders).collect()
}

pub fn check_placeholders(loaded: &LoadedCatalog) -> Vec<PlaceholderMismatchIssue> {
    loaded
        .entries_with_lines()
        .filter(|(_, _, entry)| entry.is_final() && !entry.is_empty_translation())
        .filter_map(|(line, context, entry)| {
            let (missing, unexpected) = compare(entry)?;
            Some(PlaceholderMismatchIssue {
                entry: loaded.entry_context(line, context, entry),
                missing,
                unexpected,
            })
        })
        .collect()
}

/// Differences between source and translation markers, `None` if they agree.
///
/// Plural forms may drop `%n` (e.g. "one file"), so it is only required
/// in regular entries.
fn compare(entry: &Entry) -> Option<(Vec<String>, Vec<String>)> {
    let expected = placeholders(&entry.source);
    let mut missing = BTreeSet::new();
    let mut unexpected = BTreeSet::new();

    for form in entry.forms() {
        let actual = placeholders(form);
        for p in expected.difference(&actual) {
            if !(entry.numerus && *p == Placeholder::Count) {
                missing.insert(*p);
            }
        }
        unexpected.extend(actual.difference(&expected).copied());
    }

    if missing.is_empty() && unexpected.is_empty() {
        return None;
    }
    Some((
        missing.iter().map(ToString::to_string).collect(),
        unexpected.iter().map(ToString::to_string).collect(),
    ))
}
