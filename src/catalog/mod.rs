//! Translation catalog model.
//!
//! A catalog is the in-memory form of a Qt Linguist `.ts` document: a list of
//! contexts, each holding message entries keyed by their source string.
//!
//! - `reader`: XML document -> `Catalog`
//! - `writer`: `Catalog` -> XML document
//! - `location`: resolution of relative location hints
//! - `merge`: merging extracted templates into existing catalogs
//! - `stats`: completion statistics

mod error;
mod location;
mod merge;
mod reader;
mod stats;
mod writer;

use std::fmt;

pub use error::CatalogError;
pub use location::ResolvedLocation;
pub use merge::{MergeStats, merge};
pub use stats::CatalogStats;

/// Default value of the `version` attribute on the root element.
pub const DEFAULT_FORMAT_VERSION: &str = "2.1";

/// Completion status of an entry's translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranslationStatus {
    /// Translation is done and used at runtime.
    Final,
    /// Translation is missing or still needs review.
    #[default]
    Unfinished,
    /// Source string no longer exists; kept for reference only.
    Obsolete,
}

impl TranslationStatus {
    /// Value of the `type` attribute on `<translation>`, `None` for final.
    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            TranslationStatus::Final => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Obsolete => Some("obsolete"),
        }
    }

    /// Parse a `type` attribute value. `None` means the attribute was absent.
    pub fn from_attr(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => Some(TranslationStatus::Final),
            Some("unfinished") => Some(TranslationStatus::Unfinished),
            Some("obsolete") | Some("vanished") => Some(TranslationStatus::Obsolete),
            Some(_) => None,
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationStatus::Final => write!(f, "final"),
            TranslationStatus::Unfinished => write!(f, "unfinished"),
            TranslationStatus::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// Line reference of a location hint as written in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    /// `line="120"`
    Absolute(u32),
    /// `line="+3"` or `line="-96"`, relative to the previous line in the same file.
    Relative(i64),
}

impl LineRef {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('+') || value.starts_with('-') {
            value.parse::<i64>().ok().map(LineRef::Relative)
        } else {
            value.parse::<u32>().ok().map(LineRef::Absolute)
        }
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Absolute(line) => write!(f, "{}", line),
            LineRef::Relative(offset) => write!(f, "{:+}", offset),
        }
    }
}

/// A `<location>` annotation pointing translators at a usage site.
///
/// Carried verbatim; it has no runtime meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationHint {
    pub filename: Option<String>,
    pub line: Option<LineRef>,
}

impl LocationHint {
    pub fn new(filename: impl Into<String>, line: LineRef) -> Self {
        Self {
            filename: Some(filename.into()),
            line: Some(line),
        }
    }

    /// Location that only carries a line, inheriting the previous file.
    pub fn line_only(line: LineRef) -> Self {
        Self {
            filename: None,
            line: Some(line),
        }
    }
}

/// One source string and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    pub source: String,
    /// Translation text. For numerus entries this is the first plural form.
    pub translation: String,
    pub status: TranslationStatus,
    pub locations: Vec<LocationHint>,
    /// Developer comment, also used by extraction tools to disambiguate.
    pub comment: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    /// Source text before the last merge changed it.
    pub old_source: Option<String>,
    pub numerus: bool,
    /// Plural forms; only populated when `numerus` is set.
    pub numerus_forms: Vec<String>,
}

impl Entry {
    pub fn new(
        source: impl Into<String>,
        translation: impl Into<String>,
        status: TranslationStatus,
    ) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
            status,
            ..Default::default()
        }
    }

    /// An untranslated entry, as produced by string extraction.
    pub fn untranslated(source: impl Into<String>) -> Self {
        Self::new(source, "", TranslationStatus::Unfinished)
    }

    /// A finished plural entry.
    pub fn numerus(source: impl Into<String>, forms: Vec<String>) -> Self {
        Self {
            source: source.into(),
            translation: forms.first().cloned().unwrap_or_default(),
            status: TranslationStatus::Final,
            numerus: true,
            numerus_forms: forms,
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: LocationHint) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn is_final(&self) -> bool {
        self.status == TranslationStatus::Final
    }

    pub fn is_obsolete(&self) -> bool {
        self.status == TranslationStatus::Obsolete
    }

    /// True if every translation form is empty.
    pub fn is_empty_translation(&self) -> bool {
        if self.numerus {
            self.numerus_forms.iter().all(|f| f.is_empty())
        } else {
            self.translation.is_empty()
        }
    }

    /// All translation forms, one element for regular entries.
    pub fn forms(&self) -> Vec<&str> {
        if self.numerus {
            self.numerus_forms.iter().map(String::as_str).collect()
        } else {
            vec![self.translation.as_str()]
        }
    }
}

/// A group of related entries, usually one UI command or dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub name: String,
    pub comment: Option<String>,
    pub entries: Vec<Entry>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn find(&self, source: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.source == source)
    }

    pub fn find_mut(&mut self, source: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.source == source)
    }
}

/// A whole translation catalog for one target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub version: String,
    /// Target language, e.g. `cs` or `pt_BR`.
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_FORMAT_VERSION.to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
        }
    }
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Look up an entry by its (context, source) identity.
    pub fn find(&self, context: &str, source: &str) -> Option<&Entry> {
        self.contexts
            .iter()
            .filter(|c| c.name == context)
            .find_map(|c| c.find(source))
    }

    /// Iterate over all entries with their context name, in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.contexts
            .iter()
            .flat_map(|c| c.entries.iter().map(move |e| (c.name.as_str(), e)))
    }

    pub fn entry_count(&self) -> usize {
        self.contexts.iter().map(|c| c.entries.len()).sum()
    }

    /// Record the result of a translation pass for an existing entry.
    ///
    /// Returns `false` if no entry with this identity exists. Obsolete entries
    /// are not revived here; that only happens through `merge`.
    pub fn set_translation(
        &mut self,
        context: &str,
        source: &str,
        translation: impl Into<String>,
        status: TranslationStatus,
    ) -> bool {
        let entry = self
            .contexts
            .iter_mut()
            .filter(|c| c.name == context)
            .find_map(|c| c.find_mut(source));

        match entry {
            Some(entry) if !entry.is_obsolete() => {
                let translation = translation.into();
                if entry.numerus {
                    match entry.numerus_forms.first_mut() {
                        Some(first) => *first = translation.clone(),
                        None => entry.numerus_forms.push(translation.clone()),
                    }
                }
                entry.translation = translation;
                entry.status = status;
                true
            }
            _ => false,
        }
    }

    /// (context, source) pairs that occur more than once, in document order.
    pub fn duplicates(&self) -> Vec<(&str, &str)> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for (context, entry) in self.entries() {
            if !seen.insert((context, entry.source.as_str())) {
                duplicates.push((context, entry.source.as_str()));
            }
        }
        duplicates
    }
}
