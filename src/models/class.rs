//! Classification class model
//!
//! A `ClassNode` is one `Class` element of the ClaML document: a chapter, a
//! block or a category of the hierarchy.

use crate::utils::strip_separators;

/// Kind discriminator of a ClaML class
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassKind {
    /// Chapter (e.g. "I", "XXII")
    Chapter,
    /// Block of categories (e.g. "A00-A09")
    Block,
    /// Diagnosis category (e.g. "A00", "A00.0")
    Category,
    /// Any other kind declared by the document
    Other(String),
}

impl From<&str> for ClassKind {
    fn from(s: &str) -> Self {
        match s {
            "chapter" => Self::Chapter,
            "block" => Self::Block,
            "category" => Self::Category,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One node of the classification hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    /// Code as declared, separators included
    pub code: String,
    /// Kind of the class
    pub kind: ClassKind,
    /// Text of the preferred rubric label, if any
    pub label: Option<String>,
    /// Declared code of the parent class
    pub superclass: Option<String>,
    /// Modifier groups declared directly on this class
    pub modified_by: Vec<String>,
    /// Modifier groups this class removes from its descendants
    pub excluded_modifiers: Vec<String>,
}

impl ClassNode {
    /// Create a class without label, parent or modifiers
    pub fn new(code: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            code: code.into(),
            kind,
            label: None,
            superclass: None,
            modified_by: Vec::new(),
            excluded_modifiers: Vec::new(),
        }
    }

    /// Set the preferred label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the parent class
    #[must_use]
    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Declare a modifier group on this class
    #[must_use]
    pub fn modified_by(mut self, group: impl Into<String>) -> Self {
        self.modified_by.push(group.into());
        self
    }

    /// Exclude a modifier group from the descendants of this class
    #[must_use]
    pub fn excluding(mut self, group: impl Into<String>) -> Self {
        self.excluded_modifiers.push(group.into());
        self
    }

    /// Whether this class produces diagnosis definitions
    #[must_use]
    pub fn is_category(&self) -> bool {
        self.kind == ClassKind::Category
    }

    /// Code with separator characters removed
    #[must_use]
    pub fn normalized_code(&self, separator: char) -> String {
        strip_separators(&self.code, separator)
    }
}
