use quick_xml::{Reader, events::Event};

use crate::{
    catalog::Entry,
    context::LoadedCatalog,
    issues::{CatalogLocation, EntryContext},
};

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
pub fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Line of every `<message>`'s `<source>` element, in document order.
///
/// The result lines up with `Catalog::entries()` for a document that loaded
/// successfully.
pub fn entry_lines(content: &str) -> Vec<usize> {
    let line_index = build_line_index(content);
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut lines = Vec::new();

    loop {
        let offset = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"source" && is_message_child(&stack) {
                    lines.push(offset_to_line(&line_index, offset));
                }
                stack.push(name);
            }
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"source" && is_message_child(&stack) {
                    lines.push(offset_to_line(&line_index, offset));
                }
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }

    lines
}

fn is_message_child(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|parent| parent == b"message")
}

impl LoadedCatalog {
    /// Every entry with its context name and line in the catalog file.
    pub fn entries_with_lines(&self) -> impl Iterator<Item = (usize, &str, &Entry)> {
        self.catalog
            .entries()
            .enumerate()
            .map(|(i, (context, entry))| {
                let line = self.entry_lines.get(i).copied().unwrap_or(1);
                (line, context, entry)
            })
    }

    pub fn entry_context(&self, line: usize, context: &str, entry: &Entry) -> EntryContext {
        EntryContext::new(
            CatalogLocation::new(self.file_path.clone(), line),
            context,
            entry.source.clone(),
            entry.translation.clone(),
        )
    }
}
