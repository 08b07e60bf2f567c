//! Error handling for the ClaML converter.
//!
//! Every anomaly in the source document is fatal: the converter never emits a
//! partial catalog.

pub mod util;

use std::io;
use std::path::PathBuf;

use quick_xml::events::attributes::AttrError;

/// Specialized error type for the converter
#[derive(Debug, thiserror::Error)]
pub enum ClamlError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error reading a file, with the offending path
    #[error("IO error on {}: {context}: {source}", .path.display())]
    File {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Malformed markup
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document ends before its root element is closed
    #[error("Document ends inside {open} unclosed elements")]
    UnexpectedEof { open: usize },

    /// The document has no root element
    #[error("Document has no root element")]
    EmptyDocument,

    /// Text that is not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Bytes that cannot be decoded with the declared encoding
    #[error("Document is not valid {encoding}")]
    Encoding { encoding: &'static str },

    /// Malformed attribute
    #[error("XML attribute error: {0}")]
    Attribute(#[from] AttrError),

    /// Error encoding the output envelope
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required attribute is absent from an element
    #[error("Missing attribute `{attribute}` on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// A category or modifier class has no preferred rubric label
    #[error("{element} {code} has no preferred label")]
    MissingLabel { element: &'static str, code: String },

    /// A superclass reference names a class that was never declared
    #[error("Superclass {superclass} of class {code} is not declared")]
    UnresolvedSuperclass { code: String, superclass: String },

    /// A modifier reference names a group that was never declared
    #[error("Class {code} references unknown modifier group {group}")]
    UnknownModifierGroup { code: String, group: String },

    /// The superclass chain of a class loops back on itself
    #[error("Superclass chain of class {code} revisits class {revisited}")]
    CyclicHierarchy { code: String, revisited: String },
}

impl ClamlError {
    /// Create a missing attribute error
    #[must_use]
    pub const fn missing_attribute(element: &'static str, attribute: &'static str) -> Self {
        Self::MissingAttribute { element, attribute }
    }

    /// Create a missing label error
    pub fn missing_label(element: &'static str, code: impl Into<String>) -> Self {
        Self::MissingLabel {
            element,
            code: code.into(),
        }
    }

    /// Create an unknown modifier group error
    pub fn unknown_group(code: impl Into<String>, group: impl Into<String>) -> Self {
        Self::UnknownModifierGroup {
            code: code.into(),
            group: group.into(),
        }
    }
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ClamlError>;
