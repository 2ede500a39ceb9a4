//! Catalog loading.
//!
//! The reader walks the quick-xml event stream and builds the whole catalog in
//! memory before returning it, so a failure anywhere in the document yields an
//! error and never a partially filled catalog.

use std::{fs, path::Path, str::FromStr};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use super::{
    Catalog, CatalogError, Context, Entry, LineRef, LocationHint, TranslationStatus,
};

const ROOT: &[u8] = b"TS";

impl Catalog {
    /// Parse a catalog document.
    pub fn parse(xml: &str) -> Result<Catalog, CatalogError> {
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        CatalogReader::new(xml).read_catalog()
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }
}

impl FromStr for Catalog {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Catalog::parse(s)
    }
}

struct CatalogReader<'a> {
    reader: Reader<&'a [u8]>,
}

/// Translation payload of a `<message>`.
struct TranslationData {
    status: TranslationStatus,
    text: String,
    forms: Vec<String>,
}

impl<'a> CatalogReader<'a> {
    fn new(xml: &'a str) -> Self {
        let reader = Reader::from_str(xml);
        Self { reader }
    }

    fn position(&self) -> u64 {
        self.reader.buffer_position() as u64
    }

    fn next(&mut self) -> Result<Event<'a>, CatalogError> {
        let position = self.position();
        self.reader
            .read_event()
            .map_err(|err| CatalogError::xml(position, err))
    }

    fn unclosed(&self, tag: &str) -> CatalogError {
        CatalogError::structure(
            self.position(),
            format!("unexpected end of document inside <{}>", tag),
        )
    }

    fn read_catalog(mut self) -> Result<Catalog, CatalogError> {
        let catalog = loop {
            match self.next()? {
                Event::Start(e) => {
                    let catalog = self.root(&e)?;
                    break self.read_root_body(catalog)?;
                }
                Event::Empty(e) => break self.root(&e)?,
                Event::Eof => {
                    return Err(CatalogError::structure(
                        self.position(),
                        "missing <TS> root element",
                    ));
                }
                Event::Text(t) if !is_blank(&t) => {
                    return Err(CatalogError::structure(
                        self.position(),
                        "text outside of the root element",
                    ));
                }
                _ => {}
            }
        };

        loop {
            match self.next()? {
                Event::Eof => break,
                Event::Start(_) | Event::Empty(_) => {
                    return Err(CatalogError::structure(
                        self.position(),
                        "content after the root element",
                    ));
                }
                Event::Text(t) if !is_blank(&t) => {
                    return Err(CatalogError::structure(
                        self.position(),
                        "text after the root element",
                    ));
                }
                _ => {}
            }
        }

        Ok(catalog)
    }

    fn root(&self, e: &BytesStart<'_>) -> Result<Catalog, CatalogError> {
        if e.local_name().as_ref() != ROOT {
            return Err(CatalogError::structure(
                self.position(),
                format!(
                    "expected <TS> root element, found <{}>",
                    String::from_utf8_lossy(e.local_name().as_ref())
                ),
            ));
        }

        let mut catalog = Catalog::default();
        if let Some(version) = self.attr(e, b"version")? {
            catalog.version = version;
        }
        catalog.language = self.attr(e, b"language")?;
        catalog.source_language = self.attr(e, b"sourcelanguage")?;
        Ok(catalog)
    }

    fn read_root_body(&mut self, mut catalog: Catalog) -> Result<Catalog, CatalogError> {
        loop {
            match self.next()? {
                Event::Start(e) if e.local_name().as_ref() == b"context" => {
                    let context = self.read_context()?;
                    catalog.contexts.push(context);
                }
                Event::Empty(e) if e.local_name().as_ref() == b"context" => {
                    return Err(CatalogError::structure(
                        self.position(),
                        "<context> without <name>",
                    ));
                }
                Event::Start(_) => self.skip_element()?,
                Event::End(_) => return Ok(catalog),
                Event::Eof => return Err(self.unclosed("TS")),
                _ => {}
            }
        }
    }

    fn read_context(&mut self) -> Result<Context, CatalogError> {
        let start = self.position();
        let mut name = None;
        let mut comment = None;
        let mut entries = Vec::new();

        loop {
            match self.next()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"name" => name = Some(self.read_text("name")?),
                    b"comment" => comment = Some(self.read_text("comment")?),
                    b"message" => {
                        let numerus = self.attr(&e, b"numerus")?.as_deref() == Some("yes");
                        entries.push(self.read_message(numerus)?);
                    }
                    _ => self.skip_element()?,
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"name" => name = Some(String::new()),
                    b"message" => {
                        return Err(CatalogError::structure(
                            self.position(),
                            "<message> without <source>",
                        ));
                    }
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => return Err(self.unclosed("context")),
                _ => {}
            }
        }

        let name =
            name.ok_or_else(|| CatalogError::structure(start, "<context> without <name>"))?;
        Ok(Context {
            name,
            comment,
            entries,
        })
    }

    fn read_message(&mut self, numerus: bool) -> Result<Entry, CatalogError> {
        let start = self.position();
        let mut source = None;
        let mut translation = None;
        let mut entry = Entry {
            numerus,
            ..Default::default()
        };

        loop {
            match self.next()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"source" => source = Some(self.read_text("source")?),
                    b"translation" => {
                        let status = self.status(&e)?;
                        translation = Some(self.read_translation(status, numerus)?);
                    }
                    b"location" => {
                        entry.locations.push(self.location(&e)?);
                        self.skip_element()?;
                    }
                    b"comment" => entry.comment = Some(self.read_text("comment")?),
                    b"extracomment" => {
                        entry.extra_comment = Some(self.read_text("extracomment")?)
                    }
                    b"translatorcomment" => {
                        entry.translator_comment = Some(self.read_text("translatorcomment")?)
                    }
                    b"oldsource" => entry.old_source = Some(self.read_text("oldsource")?),
                    _ => self.skip_element()?,
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"location" => entry.locations.push(self.location(&e)?),
                    b"source" => source = Some(String::new()),
                    b"translation" => {
                        translation = Some(TranslationData {
                            status: self.status(&e)?,
                            text: String::new(),
                            forms: Vec::new(),
                        })
                    }
                    b"comment" => entry.comment = Some(String::new()),
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => return Err(self.unclosed("message")),
                _ => {}
            }
        }

        entry.source =
            source.ok_or_else(|| CatalogError::structure(start, "<message> without <source>"))?;
        match translation {
            Some(data) => {
                entry.status = data.status;
                entry.translation = data.text;
                entry.numerus_forms = data.forms;
            }
            None => entry.status = TranslationStatus::Unfinished,
        }
        Ok(entry)
    }

    fn read_translation(
        &mut self,
        status: TranslationStatus,
        numerus: bool,
    ) -> Result<TranslationData, CatalogError> {
        if !numerus {
            let text = self.read_text("translation")?;
            return Ok(TranslationData {
                status,
                text,
                forms: Vec::new(),
            });
        }

        let mut forms = Vec::new();
        loop {
            match self.next()? {
                Event::Start(e) if e.local_name().as_ref() == b"numerusform" => {
                    forms.push(self.read_text("numerusform")?);
                }
                Event::Empty(e) if e.local_name().as_ref() == b"numerusform" => {
                    forms.push(String::new());
                }
                Event::Start(_) => self.skip_element()?,
                Event::End(_) => break,
                Event::Eof => return Err(self.unclosed("translation")),
                _ => {}
            }
        }

        Ok(TranslationData {
            status,
            text: forms.first().cloned().unwrap_or_default(),
            forms,
        })
    }

    /// Read character data up to the closing tag of the current element.
    ///
    /// Handles `<byte value="..."/>`, which the format uses for characters
    /// that cannot appear literally in XML.
    fn read_text(&mut self, tag: &str) -> Result<String, CatalogError> {
        let mut text = String::new();
        loop {
            match self.next()? {
                Event::Text(t) => {
                    let position = self.position();
                    let unescaped = t
                        .unescape()
                        .map_err(|err| CatalogError::xml(position, err))?;
                    text.push_str(&unescaped);
                }
                Event::CData(data) => text.push_str(&String::from_utf8_lossy(&data)),
                Event::Empty(e) if e.local_name().as_ref() == b"byte" => {
                    let value = self.attr(&e, b"value")?.unwrap_or_default();
                    let ch = parse_byte_value(&value).ok_or_else(|| {
                        CatalogError::structure(
                            self.position(),
                            format!("invalid <byte> value \"{}\"", value),
                        )
                    })?;
                    text.push(ch);
                }
                Event::Start(e) => {
                    return Err(CatalogError::structure(
                        self.position(),
                        format!(
                            "unexpected <{}> inside <{}>",
                            String::from_utf8_lossy(e.local_name().as_ref()),
                            tag
                        ),
                    ));
                }
                Event::End(_) => return Ok(text),
                Event::Eof => return Err(self.unclosed(tag)),
                _ => {}
            }
        }
    }

    /// Skip the element whose start tag was just read.
    fn skip_element(&mut self) -> Result<(), CatalogError> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.next()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => return Err(self.unclosed("element")),
                _ => {}
            }
        }
        Ok(())
    }

    fn status(&self, e: &BytesStart<'_>) -> Result<TranslationStatus, CatalogError> {
        let value = self.attr(e, b"type")?;
        TranslationStatus::from_attr(value.as_deref()).ok_or_else(|| {
            CatalogError::InvalidStatus {
                position: self.position(),
                value: value.unwrap_or_default(),
            }
        })
    }

    fn location(&self, e: &BytesStart<'_>) -> Result<LocationHint, CatalogError> {
        let filename = self.attr(e, b"filename")?;
        let line = match self.attr(e, b"line")? {
            Some(value) => Some(LineRef::parse(&value).ok_or_else(|| {
                CatalogError::structure(
                    self.position(),
                    format!("invalid location line \"{}\"", value),
                )
            })?),
            None => None,
        };
        Ok(LocationHint { filename, line })
    }

    fn attr(&self, e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, CatalogError> {
        for attr in e.attributes() {
            let attr = attr.map_err(|err| CatalogError::xml(self.position(), err))?;
            if attr.key.local_name().as_ref() == key {
                let value = attr
                    .unescape_value()
                    .map_err(|err| CatalogError::xml(self.position(), err))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }
}

fn is_blank(text: &[u8]) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

/// `<byte value="x1b"/>` is hexadecimal with an `x` prefix, decimal otherwise.
fn parse_byte_value(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}
