//! Runtime string lookup.
//!
//! A `Translator` is the read-only table an application loads at startup. It
//! only holds final translations; everything else falls back to the source
//! string. It can be built straight from a catalog or loaded from its compiled
//! JSON form.

mod plural;

use std::collections::BTreeMap;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

pub use plural::PluralRule;

use crate::catalog::Catalog;

/// Lookup table: context -> source -> translation forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translator {
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    messages: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl Translator {
    /// Index the final entries of a catalog.
    ///
    /// If a (context, source) pair is repeated, the first final entry wins.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut messages: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();

        for (context, entry) in catalog.entries().filter(|(_, e)| e.is_final()) {
            let forms = if entry.numerus && !entry.numerus_forms.is_empty() {
                entry.numerus_forms.clone()
            } else {
                vec![entry.translation.clone()]
            };
            messages
                .entry(context.to_string())
                .or_default()
                .entry(entry.source.clone())
                .or_insert(forms);
        }

        Self {
            language: catalog.language.clone(),
            messages,
        }
    }

    /// Load the compiled form written by [`Translator::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse compiled translations")
    }

    /// Compiled form of the table.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize translations")
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Number of translated (context, source) pairs.
    pub fn len(&self) -> usize {
        self.messages.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn forms(&self, context: &str, source: &str) -> Option<&[String]> {
        self.messages
            .get(context)
            .and_then(|sources| sources.get(source))
            .map(Vec::as_slice)
    }

    /// Localized string for `source`, or `source` itself when there is no
    /// final translation.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        match self.forms(context, source).and_then(|forms| forms.first()) {
            Some(translation) => translation.as_str(),
            None => source,
        }
    }

    /// Plural-aware lookup: picks the form for `n` and substitutes `%n`.
    pub fn translate_plural(&self, context: &str, source: &str, n: i64) -> String {
        let template = match self.forms(context, source) {
            Some(forms) if !forms.is_empty() => {
                let rule = self
                    .language
                    .as_deref()
                    .map(PluralRule::for_language)
                    .unwrap_or(PluralRule::OneOther);
                let index = rule.index(n.unsigned_abs()).min(forms.len() - 1);
                forms[index].as_str()
            }
            _ => source,
        };
        template.replace("%n", &n.to_string())
    }
}
