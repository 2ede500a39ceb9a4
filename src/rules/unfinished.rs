//! Unfinished translation detection rule.
//!
//! Reports every entry that is still waiting for a translator. Obsolete
//! entries are ignored since they are never used at runtime.

use crate::{
    catalog::TranslationStatus, context::LoadedCatalog, issues::UnfinishedIssue,
};

pub fn check_unfinished_issues(catalogs: &[LoadedCatalog]) -> Vec<UnfinishedIssue> {
    catalogs.iter().flat_map(check_unfinished).collect()
}

pub fn check_unfinished(loaded: &LoadedCatalog) -> Vec<UnfinishedIssue> {
    loaded
        .entries_with_lines()
        .filter(|(_, _, entry)| entry.status == TranslationStatus::Unfinished)
        .map(|(line, context, entry)| UnfinishedIssue {
            entry: loaded.entry_context(line, context, entry),
        })
        .collect()
}
