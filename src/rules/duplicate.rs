//! Duplicate entry detection rule.
//!
//! Within a context the source string is the entry's identity; a second
//! definition makes the lookup result depend on document order.

use std::collections::HashMap;

use crate::{context::LoadedCatalog, issues::DuplicateEntryIssue};

pub fn check_duplicate_issues(catalogs: &[LoadedCatalog]) -> Vec<DuplicateEntryIssue> {
    catalogs.iter().flat_map(check_duplicates).collect()
}

pub fn check_duplicates(loaded: &LoadedCatalog) -> Vec<DuplicateEntryIssue> {
    let mut first_seen: HashMap<(&str, &str), usize> = HashMap::new();
    let mut issues = Vec::new();

    for (line, context, entry) in loaded.entries_with_lines() {
        match first_seen.get(&(context, entry.source.as_str())) {
            Some(&first_line) => issues.push(DuplicateEntryIssue {
                entry: loaded.entry_context(line, context, entry),
                first_line,
            }),
            None => {
                first_seen.insert((context, entry.source.as_str()), line);
            }
        }
    }

    issues
}
