//! Modifier group vocabularies
//!
//! Maps each declared `Modifier` to the ordered suffix keys of its
//! `ModifierClass` declarations.

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::{ClamlError, Result};
use crate::models::{ModifierClassDecl, ModifierGroup};
use crate::utils::strip_separators;

/// Lookup from modifier group identifier to its vocabulary
#[derive(Debug, Clone, Default)]
pub struct ModifierIndex {
    groups: FxHashMap<String, ModifierGroup>,
}

impl ModifierIndex {
    /// Build the vocabularies of the declared groups
    ///
    /// Modifier classes are attached to their group in declaration order.
    /// A class whose declared code ends with a space is left out of the
    /// vocabulary. Classes of undeclared groups are ignored.
    pub fn build(
        modifiers: &[String],
        modifier_classes: &[ModifierClassDecl],
        separator: char,
    ) -> Result<Self> {
        let mut groups: FxHashMap<String, ModifierGroup> = modifiers
            .iter()
            .map(|code| (code.clone(), ModifierGroup::new(code.clone())))
            .collect();

        for class in modifier_classes {
            let Some(group) = groups.get_mut(&class.modifier) else {
                debug!(
                    "Ignoring modifier class {:?} of undeclared group {}",
                    class.code, class.modifier
                );
                continue;
            };

            let label = class
                .label
                .as_ref()
                .ok_or_else(|| ClamlError::missing_label("Modifier class", &class.code))?;

            if class.is_placeholder() {
                continue;
            }

            group.insert(strip_separators(&class.code, separator), label.clone());
        }

        Ok(Self { groups })
    }

    /// Vocabulary of a group
    #[must_use]
    pub fn get(&self, group: &str) -> Option<&ModifierGroup> {
        self.groups.get(group)
    }

    /// Vocabulary of a group referenced by a class
    ///
    /// # Errors
    /// Returns `UnknownModifierGroup` if the group was never declared
    pub fn require(&self, group: &str, referenced_by: &str) -> Result<&ModifierGroup> {
        self.get(group)
            .ok_or_else(|| ClamlError::unknown_group(referenced_by, group))
    }

    #[must_use]
    pub fn contains(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
