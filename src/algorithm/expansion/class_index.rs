//! Code to class lookup for ancestor resolution.

use rustc_hash::FxHashMap;

use crate::error::{ClamlError, Result};
use crate::models::ClassNode;

/// Lookup from declared class code to class node
///
/// Every class kind is indexed, since chapters and blocks take part in the
/// superclass chain. When two classes share a code the first one is kept.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex<'a> {
    classes: FxHashMap<&'a str, &'a ClassNode>,
}

impl<'a> ClassIndex<'a> {
    #[must_use]
    pub fn build(classes: &'a [ClassNode]) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(classes.len());

        for class in classes {
            index.entry(class.code.as_str()).or_insert(class);
        }

        Self { classes: index }
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&'a ClassNode> {
        self.classes.get(code).copied()
    }

    /// Parent of a class, `None` at the top of the hierarchy
    ///
    /// # Errors
    /// Returns `UnresolvedSuperclass` if the declared parent is not indexed
    pub fn superclass_of(&self, class: &ClassNode) -> Result<Option<&'a ClassNode>> {
        let Some(superclass) = class.superclass.as_deref() else {
            return Ok(None);
        };

        self.get(superclass)
            .map(Some)
            .ok_or_else(|| ClamlError::UnresolvedSuperclass {
                code: class.code.clone(),
                superclass: superclass.to_string(),
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
