use std::collections::HashMap;

use super::{Catalog, LineRef};

/// Absolute position of one location hint.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResolvedLocation {
    pub context: String,
    pub source: String,
    /// File path as written in the catalog (relative to the catalog file).
    pub file: String,
    /// 1-based line, 0 when the hint carries no line.
    pub line: u32,
}

impl Catalog {
    /// Resolve every location hint to an absolute file and line.
    ///
    /// A hint without `filename` belongs to the file of the previous hint in
    /// the same message, or for a message's first hint, to the file that opened
    /// the previous message. A relative line moves a per-file counter and
    /// resolves to its new value; absolute lines leave the counter alone. The
    /// state runs across the whole document, not per context, and obsolete
    /// entries take part in it like any other.
    pub fn resolved_locations(&self) -> Vec<ResolvedLocation> {
        let mut current_file = String::new();
        let mut current_line: HashMap<String, i64> = HashMap::new();
        let mut resolved = Vec::new();

        for (context, entry) in self.entries() {
            let mut message_file = current_file.clone();
            for (index, hint) in entry.locations.iter().enumerate() {
                if let Some(filename) = &hint.filename {
                    if index == 0 {
                        current_file = filename.clone();
                    }
                    message_file = filename.clone();
                }
                let line = match hint.line {
                    Some(LineRef::Absolute(line)) => i64::from(line),
                    Some(LineRef::Relative(offset)) => {
                        let last = current_line.entry(message_file.clone()).or_insert(0);
                        *last = last.saturating_add(offset);
                        *last
                    }
                    None => 0,
                };
                resolved.push(ResolvedLocation {
                    context: context.to_string(),
                    source: entry.source.clone(),
                    file: message_file.clone(),
                    line: clamp_line(line),
                });
            }
        }

        resolved
    }
}

/// Lines outside `0..=u32::MAX` are clamped to the nearest bound.
fn clamp_line(line: i64) -> u32 {
    u32::try_from(line.max(0)).unwrap_or(u32::MAX)
}
