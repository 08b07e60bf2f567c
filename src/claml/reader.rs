//! Event-driven ClaML reader built on `quick-xml`.
//!
//! Only direct children of a `Class` or `ModifierClass` are attached to it.
//! The preferred label is the leading text of the first `Label` under a
//! `Rubric kind="preferred"`.

use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ClamlError, Result};
use crate::models::{ClassKind, ClassNode, ModifierClassDecl};

use super::document::ClamlDocument;

const CLASS: &[u8] = b"Class";
const MODIFIER: &[u8] = b"Modifier";
const MODIFIER_CLASS: &[u8] = b"ModifierClass";
const SUPER_CLASS: &[u8] = b"SuperClass";
const MODIFIED_BY: &[u8] = b"ModifiedBy";
const EXCLUDE_MODIFIER: &[u8] = b"ExcludeModifier";
const RUBRIC: &[u8] = b"Rubric";
const LABEL: &[u8] = b"Label";

/// Reads a ClaML document into a [`ClamlDocument`]
pub struct ClamlReader<'a> {
    reader: Reader<&'a [u8]>,
    document: ClamlDocument,
    pending: Vec<PendingNode>,
    depth: usize,
    has_root: bool,
}

impl<'a> ClamlReader<'a> {
    #[must_use]
    pub fn new(xml: &'a str) -> Self {
        Self {
            reader: Reader::from_str(xml),
            document: ClamlDocument::default(),
            pending: Vec::new(),
            depth: 0,
            has_root: false,
        }
    }

    /// Consume the whole input
    pub fn read_document(mut self) -> Result<ClamlDocument> {
        loop {
            match self.reader.read_event()? {
                Event::Start(e) => {
                    self.has_root = true;
                    self.depth += 1;
                    self.open(&e, self.depth)?;
                }
                Event::Empty(e) => {
                    self.has_root = true;
                    self.open(&e, self.depth + 1)?;
                    self.close(self.depth + 1);
                }
                Event::End(_) => {
                    self.close(self.depth);
                    self.depth = self.depth.saturating_sub(1);
                }
                Event::Text(t) => {
                    if self.capturing() {
                        self.capture(&t.unescape()?);
                    }
                }
                Event::CData(c) => {
                    if self.capturing() {
                        self.capture(std::str::from_utf8(&c)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !self.has_root {
            return Err(ClamlError::EmptyDocument);
        }
        if self.depth != 0 || !self.pending.is_empty() {
            return Err(ClamlError::UnexpectedEof { open: self.depth });
        }

        debug!(
            "Read {} classes, {} modifiers and {} modifier classes",
            self.document.classes.len(),
            self.document.modifiers.len(),
            self.document.modifier_classes.len()
        );

        Ok(self.document)
    }

    fn open(&mut self, e: &BytesStart<'_>, depth: usize) -> Result<()> {
        let name = e.name();

        match name.as_ref() {
            CLASS => {
                let code = required_attribute(e, "Class", "code")?;
                let kind = attribute(e, "kind")?.unwrap_or_default();
                self.pending.push(PendingNode::class(code, &kind, depth));
            }
            MODIFIER_CLASS => {
                let code = required_attribute(e, "ModifierClass", "code")?;
                let modifier = required_attribute(e, "ModifierClass", "modifier")?;
                self.pending
                    .push(PendingNode::modifier_class(code, modifier, depth));
            }
            MODIFIER if self.pending.is_empty() => {
                let code = required_attribute(e, "Modifier", "code")?;
                self.document.modifiers.push(code);
            }
            child => {
                if let Some(node) = self.pending.last_mut() {
                    node.open_child(child, e, depth)?;
                }
            }
        }

        Ok(())
    }

    fn close(&mut self, depth: usize) {
        let Some(node) = self.pending.last_mut() else {
            return;
        };

        node.close_child(depth);

        if node.depth == depth {
            if let Some(node) = self.pending.pop() {
                node.finish(&mut self.document);
            }
        }
    }

    fn capturing(&self) -> bool {
        self.pending
            .last()
            .is_some_and(|node| node.label.captures_at(self.depth))
    }

    fn capture(&mut self, text: &str) {
        if let Some(node) = self.pending.last_mut() {
            node.label.push(text);
        }
    }
}

enum PendingElement {
    Class(ClassKind),
    ModifierClass(String),
}

/// A `Class` or `ModifierClass` whose end tag has not been read yet
struct PendingNode {
    element: PendingElement,
    code: String,
    depth: usize,
    superclass: Option<String>,
    modified_by: Vec<String>,
    excluded: Vec<String>,
    label: LabelCapture,
}

impl PendingNode {
    fn class(code: String, kind: &str, depth: usize) -> Self {
        Self::new(PendingElement::Class(ClassKind::from(kind)), code, depth)
    }

    fn modifier_class(code: String, modifier: String, depth: usize) -> Self {
        Self::new(PendingElement::ModifierClass(modifier), code, depth)
    }

    fn new(element: PendingElement, code: String, depth: usize) -> Self {
        Self {
            element,
            code,
            depth,
            superclass: None,
            modified_by: Vec::new(),
            excluded: Vec::new(),
            label: LabelCapture::default(),
        }
    }

    fn open_child(&mut self, name: &[u8], e: &BytesStart<'_>, depth: usize) -> Result<()> {
        if depth != self.depth + 1 {
            self.label.open_nested(name, depth);
            return Ok(());
        }

        match name {
            SUPER_CLASS => {
                let code = required_attribute(e, "SuperClass", "code")?;
                self.superclass.get_or_insert(code);
            }
            MODIFIED_BY => {
                self.modified_by
                    .push(required_attribute(e, "ModifiedBy", "code")?);
            }
            EXCLUDE_MODIFIER => {
                self.excluded
                    .push(required_attribute(e, "ExcludeModifier", "code")?);
            }
            RUBRIC => {
                if attribute(e, "kind")?.as_deref() == Some("preferred") {
                    self.label.open_rubric(depth);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn close_child(&mut self, depth: usize) {
        self.label.close(depth);
    }

    fn finish(self, document: &mut ClamlDocument) {
        match self.element {
            PendingElement::Class(kind) => document.classes.push(ClassNode {
                code: self.code,
                kind,
                label: self.label.text,
                superclass: self.superclass,
                modified_by: self.modified_by,
                excluded_modifiers: self.excluded,
            }),
            PendingElement::ModifierClass(modifier) => {
                document.modifier_classes.push(ModifierClassDecl {
                    code: self.code,
                    modifier,
                    label: self.label.text,
                });
            }
        }
    }
}

/// Tracks the first `Label` of the preferred rubrics of one node
#[derive(Debug, Default)]
struct LabelCapture {
    rubric_depth: Option<usize>,
    label_depth: Option<usize>,
    text: Option<String>,
    closed: bool,
}

impl LabelCapture {
    fn open_rubric(&mut self, depth: usize) {
        if self.text.is_none() {
            self.rubric_depth = Some(depth);
        }
    }

    fn open_nested(&mut self, name: &[u8], depth: usize) {
        match self.label_depth {
            // Markup inside the label ends its leading text
            Some(label_depth) if depth > label_depth => self.closed = true,
            None if name == LABEL
                && self.text.is_none()
                && self.rubric_depth.is_some_and(|rubric| depth == rubric + 1) =>
            {
                self.label_depth = Some(depth);
                self.text = Some(String::new());
            }
            _ => {}
        }
    }

    fn captures_at(&self, depth: usize) -> bool {
        !self.closed && self.label_depth == Some(depth)
    }

    fn push(&mut self, text: &str) {
        if let Some(label) = self.text.as_mut() {
            label.push_str(text);
        }
    }

    fn close(&mut self, depth: usize) {
        if self.label_depth == Some(depth) {
            self.label_depth = None;
            self.closed = true;
        }
        if self.rubric_depth == Some(depth) {
            self.rubric_depth = None;
        }
    }
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    match e.try_get_attribute(name)? {
        // Input is always a Rust `str`, so a UTF-8 decoder (what `unescape_value` uses
        // without the `encoding` feature) is exact.
        Some(attr) => Ok(Some(
            attr.decode_and_unescape_value(Reader::from_str("").decoder())?
                .into_owned(),
        )),
        None => Ok(None),
    }
}

fn required_attribute(
    e: &BytesStart<'_>,
    element: &'static str,
    name: &'static str,
) -> Result<String> {
    attribute(e, name)?.ok_or_else(|| ClamlError::missing_attribute(element, name))
}
