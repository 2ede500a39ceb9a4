use std::{fmt, io, path::PathBuf};

/// Error raised while loading or saving a catalog.
///
/// Loading is all-or-nothing: any of these aborts the whole document.
#[derive(Debug)]
pub enum CatalogError {
    /// The file could not be read or written.
    Io { path: PathBuf, source: io::Error },
    /// The document is not well-formed XML.
    Xml { position: u64, message: String },
    /// The document is well-formed but not a valid catalog.
    Structure { position: u64, message: String },
    /// A `<translation type="...">` value we do not know.
    InvalidStatus { position: u64, value: String },
}

impl CatalogError {
    pub(crate) fn structure(position: u64, message: impl Into<String>) -> Self {
        Self::Structure {
            position,
            message: message.into(),
        }
    }

    pub(crate) fn xml(position: u64, err: impl fmt::Display) -> Self {
        Self::Xml {
            position,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Xml { position, message } => {
                write!(f, "malformed XML at byte {}: {}", position, message)
            }
            Self::Structure { position, message } => {
                write!(f, "invalid catalog at byte {}: {}", position, message)
            }
            Self::InvalidStatus { position, value } => {
                write!(
                    f,
                    "invalid translation type \"{}\" at byte {}",
                    value, position
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
