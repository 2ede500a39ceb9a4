//! Empty final translation rule.
//!
//! A final entry replaces the source string at runtime, so an empty one makes
//! the UI element blank.

use crate::{context::LoadedCatalog, issues::EmptyTranslationIssue};

pub fn check_empty_translation_issues(catalogs: &[LoadedCatalog]) -> Vec<EmptyTranslationIssue> {
    catalogs.iter().flat_map(check_empty_translations).collect()
}

pub fn check_empty_translations(loaded: &LoadedCatalog) -> Vec<EmptyTranslationIssue> {
    loaded
        .entries_with_lines()
        .filter(|(_, _, entry)| {
            entry.is_final() && !entry.source.is_empty() && entry.is_empty_translation()
        })
        .map(|(line, context, entry)| EmptyTranslationIssue {
            entry: loaded.entry_context(line, context, entry),
        })
        .collect()
}
