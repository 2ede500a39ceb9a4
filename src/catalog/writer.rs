//! Catalog serialization.
//!
//! Output follows the layout Qt Linguist tools write: XML declaration,
//! `<!DOCTYPE TS>`, contexts at column 0 and 4-space indentation below.

use std::{fmt::Write as _, fs, path::Path};

use quick_xml::escape::escape;

use super::{Catalog, CatalogError, Context, Entry};

const INDENT: &str = "    ";

impl Catalog {
    /// Serialize the catalog to an XML document.
    pub fn to_xml(&self) -> String {
        let mut out = String::with_capacity(256 + self.entry_count() * 160);
        out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        out.push_str("<!DOCTYPE TS>\n");

        out.push_str("<TS");
        push_attr(&mut out, "version", &self.version);
        if let Some(language) = &self.language {
            push_attr(&mut out, "language", language);
        }
        if let Some(source_language) = &self.source_language {
            push_attr(&mut out, "sourcelanguage", source_language);
        }
        out.push_str(">\n");

        for context in &self.contexts {
            write_context(&mut out, context);
        }

        out.push_str("</TS>\n");
        out
    }

    /// Write the catalog to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        fs::write(path, self.to_xml()).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    push_element(out, 1, "name", &context.name);
    if let Some(comment) = &context.comment {
        push_element(out, 1, "comment", comment);
    }
    for entry in &context.entries {
        write_entry(out, entry);
    }
    out.push_str("</context>\n");
}

fn write_entry(out: &mut String, entry: &Entry) {
    out.push_str(INDENT);
    out.push_str("<message");
    if entry.numerus {
        push_attr(out, "numerus", "yes");
    }
    out.push_str(">\n");

    for location in &entry.locations {
        out.push_str(INDENT);
        out.push_str(INDENT);
        out.push_str("<location");
        if let Some(filename) = &location.filename {
            push_attr(out, "filename", filename);
        }
        if let Some(line) = location.line {
            push_attr(out, "line", &line.to_string());
        }
        out.push_str("/>\n");
    }

    push_element(out, 2, "source", &entry.source);
    if let Some(old_source) = &entry.old_source {
        push_element(out, 2, "oldsource", old_source);
    }
    if let Some(comment) = &entry.comment {
        push_element(out, 2, "comment", comment);
    }
    if let Some(extra) = &entry.extra_comment {
        push_element(out, 2, "extracomment", extra);
    }
    if let Some(translator) = &entry.translator_comment {
        push_element(out, 2, "translatorcomment", translator);
    }

    out.push_str(INDENT);
    out.push_str(INDENT);
    out.push_str("<translation");
    if let Some(status) = entry.status.as_attr() {
        push_attr(out, "type", status);
    }
    out.push('>');
    if entry.numerus {
        if !entry.numerus_forms.is_empty() {
            out.push('\n');
            for form in &entry.numerus_forms {
                push_element(out, 3, "numerusform", form);
            }
            out.push_str(INDENT);
            out.push_str(INDENT);
        }
    } else {
        push_text(out, &entry.translation);
    }
    out.push_str("</translation>\n");

    out.push_str(INDENT);
    out.push_str("</message>\n");
}

fn push_element(out: &mut String, depth: usize, tag: &str, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    let _ = write!(out, "<{}>", tag);
    push_text(out, text);
    let _ = writeln!(out, "</{}>", tag);
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", key, escape(value));
}

/// Escape character data; control characters XML cannot carry become `<byte/>`.
fn push_text(out: &mut String, text: &str) {
    let mut plain_start = 0;
    for (index, ch) in text.char_indices() {
        if is_restricted(ch) {
            out.push_str(&escape(&text[plain_start..index]));
            let _ = write!(out, "<byte value=\"x{:x}\"/>", ch as u32);
            plain_start = index + ch.len_utf8();
        }
    }
    out.push_str(&escape(&text[plain_start..]));
}

fn is_restricted(ch: char) -> bool {
    (ch < '\u{20}' && !matches!(ch, '\t' | '\n' | '\r')) || ch == '\u{7f}'
}
