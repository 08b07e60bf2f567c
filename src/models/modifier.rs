//! Modifier models
//!
//! Modifiers are vocabularies of suffix characters appended to a base
//! diagnosis code (e.g. laterality or severity digits).

/// A `ModifierClass` declaration as read from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierClassDecl {
    /// Code as declared, separators and trailing spaces included
    pub code: String,
    /// Identifier of the modifier group this class belongs to
    pub modifier: String,
    /// Text of the preferred rubric label, if any
    pub label: Option<String>,
}

impl ModifierClassDecl {
    pub fn new(
        code: impl Into<String>,
        modifier: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            modifier: modifier.into(),
            label: Some(label.into()),
        }
    }

    /// Whether the declared code marks a value that cannot be selected on
    /// its own (its raw code ends with a space)
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.code.ends_with(' ')
    }
}

/// One suffix value of a modifier group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierEntry {
    /// Suffix appended to the base code
    pub key: String,
    /// Label appended to the base label
    pub label: String,
}

/// Ordered vocabulary of one modifier group
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModifierGroup {
    /// Group identifier
    pub code: String,
    entries: Vec<ModifierEntry>,
}

impl ModifierGroup {
    /// Create an empty group
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            entries: Vec::new(),
        }
    }

    /// Add a suffix value
    ///
    /// A key that is already present keeps its position and takes the new
    /// label.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        let key = key.into();
        let label = label.into();

        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.label = label,
            None => self.entries.push(ModifierEntry { key, label }),
        }
    }

    /// Suffix values in declaration order
    #[must_use]
    pub fn entries(&self) -> &[ModifierEntry] {
        &self.entries
    }

    /// Label of a suffix key
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
