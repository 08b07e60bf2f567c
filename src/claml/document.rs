//! In-memory form of a parsed ClaML document.

use std::borrow::Cow;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{ClamlError, Result, util::safe_read};
use crate::models::{ClassNode, ModifierClassDecl};

use super::reader::ClamlReader;

/// Everything the converter needs from a ClaML document, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClamlDocument {
    /// Every `Class` element, whatever its kind
    pub classes: Vec<ClassNode>,
    /// Codes of the declared `Modifier` groups
    pub modifiers: Vec<String>,
    /// Every `ModifierClass` element
    pub modifier_classes: Vec<ModifierClassDecl>,
}

impl ClamlDocument {
    /// Parse a document held in memory
    pub fn parse(xml: &str) -> Result<Self> {
        ClamlReader::new(xml).read_document()
    }

    /// Parse raw document bytes, honouring the encoding of the XML declaration
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let xml = decode_document(bytes)?;
        Self::parse(&xml)
    }

    /// Read and parse a document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = safe_read(path, "ClaML classification")?;
        Self::from_bytes(&bytes)
    }

    /// Classes of kind `category`, in declaration order
    pub fn categories(&self) -> impl Iterator<Item = &ClassNode> {
        self.classes.iter().filter(|class| class.is_category())
    }
}

/// Decode document bytes to text
///
/// Without an `encoding` pseudo-attribute the document must be UTF-8.
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>> {
    let mut reader = Reader::from_reader(bytes);
    let declared = match reader.read_event()? {
        Event::Decl(decl) => decl.encoder(),
        _ => None,
    };

    match declared {
        Some(encoding) => {
            let (text, _, malformed) = encoding.decode(bytes);
            if malformed {
                return Err(ClamlError::Encoding {
                    encoding: encoding.name(),
                });
            }
            Ok(text)
        }
        None => Ok(Cow::Borrowed(std::str::from_utf8(bytes)?)),
    }
}
