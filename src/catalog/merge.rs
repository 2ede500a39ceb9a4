//! Merging freshly extracted strings into an existing catalog.
//!
//! Entries are matched by their (context, source) identity. Translations are
//! never dropped: strings that disappeared from the application are marked
//! obsolete and kept in place.

use std::collections::{HashMap, HashSet};

use super::{Catalog, Context, Entry, TranslationStatus};
use crate::translator::PluralRule;

/// Counters describing what a merge changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    /// Entries present in both catalogs.
    pub kept: usize,
    /// Entries only present in the template.
    pub added: usize,
    /// Entries that became obsolete in this merge.
    pub obsoleted: usize,
    /// Obsolete entries whose source string reappeared.
    pub revived: usize,
    /// Repeated (context, source) entries folded into their first occurrence.
    pub duplicates_folded: usize,
}

impl MergeStats {
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.obsoleted > 0 || self.revived > 0 || self.duplicates_folded > 0
    }
}

/// Merge an extracted template into an existing catalog.
///
/// - entries in both keep their translation and status, but take location
///   hints and comments from the template; obsolete ones come back as
///   unfinished
/// - an entry whose plural flag differs from the template takes the
///   template's flag; its text is carried over and it becomes unfinished
/// - template-only entries are appended as unfinished
/// - existing-only entries become obsolete
///
/// Existing contexts and entries keep their order; new ones follow in template
/// order. Document attributes come from `existing`.
pub fn merge(existing: &Catalog, extracted: &Catalog) -> (Catalog, MergeStats) {
    let mut stats = MergeStats::default();

    let mut base = existing.clone();
    stats.duplicates_folded += base.dedupe();
    let mut template = extracted.clone();
    stats.duplicates_folded += template.dedupe();

    let template_index: HashMap<(&str, &str), &Entry> = template
        .entries()
        .map(|(context, entry)| ((context, entry.source.as_str()), entry))
        .collect();

    let plural_forms =
        PluralRule::for_language(base.language.as_deref().unwrap_or_default()).form_count();

    let mut merged = Catalog {
        version: base.version.clone(),
        language: base.language.clone(),
        source_language: base
            .source_language
            .clone()
            .or_else(|| template.source_language.clone()),
        contexts: Vec::with_capacity(base.contexts.len()),
    };
    let mut matched: HashSet<(String, String)> = HashSet::new();

    for context in &base.contexts {
        let template_context = template.context(&context.name);
        let mut out = Context {
            name: context.name.clone(),
            comment: template_context
                .and_then(|c| c.comment.clone())
                .or_else(|| context.comment.clone()),
            entries: Vec::with_capacity(context.entries.len()),
        };

        for entry in &context.entries {
            let key = (context.name.as_str(), entry.source.as_str());
            let merged_entry = match template_index.get(&key) {
                Some(fresh) => {
                    matched.insert((context.name.clone(), entry.source.clone()));
                    let mut updated = entry.clone();
                    updated.locations = fresh.locations.clone();
                    updated.comment = fresh.comment.clone();
                    updated.extra_comment = fresh.extra_comment.clone();
                    if fresh.numerus != entry.numerus {
                        convert_numerus(&mut updated, fresh.numerus, plural_forms);
                    }
                    if updated.is_obsolete() {
                        updated.status = TranslationStatus::Unfinished;
                        stats.revived += 1;
                    } else {
                        stats.kept += 1;
                    }
                    updated
                }
                None => {
                    let mut stale = entry.clone();
                    if !stale.is_obsolete() {
                        stale.status = TranslationStatus::Obsolete;
                        stats.obsoleted += 1;
                    }
                    stale
                }
            };
            out.entries.push(merged_entry);
        }

        merged.contexts.push(out);
    }

    for context in &template.contexts {
        let new_entries: Vec<Entry> = context
            .entries
            .iter()
            .filter(|e| !matched.contains(&(context.name.clone(), e.source.clone())))
            .map(|e| {
                let mut fresh = e.clone();
                fresh.status = TranslationStatus::Unfinished;
                fresh
            })
            .collect();
        if new_entries.is_empty() {
            continue;
        }
        stats.added += new_entries.len();

        match merged.contexts.iter_mut().find(|c| c.name == context.name) {
            Some(target) => target.entries.extend(new_entries),
            None => merged.contexts.push(Context {
                name: context.name.clone(),
                comment: context.comment.clone(),
                entries: new_entries,
            }),
        }
    }

    (merged, stats)
}

/// Switch an entry between a single translation and plural forms.
fn convert_numerus(entry: &mut Entry, numerus: bool, plural_forms: usize) {
    if numerus {
        let mut forms = Vec::with_capacity(plural_forms);
        if !entry.translation.is_empty() {
            forms.push(entry.translation.clone());
            forms.resize(plural_forms.max(1), String::new());
        }
        entry.numerus_forms = forms;
    } else {
        if let Some(first) = entry.numerus_forms.first() {
            entry.translation = first.clone();
        }
        entry.numerus_forms.clear();
    }
    entry.numerus = numerus;
    if entry.is_final() {
        entry.status = TranslationStatus::Unfinished;
    }
}

impl Catalog {
    /// Fold repeated context blocks and repeated (context, source) entries.
    ///
    /// The first occurrence wins; if it has no translation, a later final one
    /// fills it in. Returns the number of entries folded away.
    pub fn dedupe(&mut self) -> usize {
        let mut folded = 0;
        let mut contexts: Vec<Context> = Vec::with_capacity(self.contexts.len());
        let mut context_index: HashMap<String, usize> = HashMap::new();

        for context in self.contexts.drain(..) {
            let index = match context_index.get(&context.name) {
                Some(&index) => {
                    if contexts[index].comment.is_none() {
                        contexts[index].comment = context.comment;
                    }
                    index
                }
                None => {
                    context_index.insert(context.name.clone(), contexts.len());
                    contexts.push(Context {
                        name: context.name,
                        comment: context.comment,
                        entries: Vec::new(),
                    });
                    contexts.len() - 1
                }
            };

            let target = &mut contexts[index];
            for entry in context.entries {
                match target.find_mut(&entry.source) {
                    Some(first) => {
                        folded += 1;
                        if first.is_empty_translation() && entry.is_final() {
                            *first = entry;
                        }
                    }
                    None => target.entries.push(entry),
                }
            }
        }

        self.contexts = contexts;
        folded
    }
}
