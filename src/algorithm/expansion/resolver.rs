//! Modifier group resolution
//!
//! A category inherits every modifier group declared along its superclass
//! chain. Exclusions declared by its ancestors remove inherited groups from
//! it; exclusions declared by the category itself only apply to its own
//! descendants.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::error::{ClamlError, Result};
use crate::models::{ClassNode, ModifierGroup};

use super::class_index::ClassIndex;
use super::modifier_index::ModifierIndex;

/// Modifier groups applying to one category, in resolution order
pub type ResolvedGroups<'a> = SmallVec<[&'a ModifierGroup; 4]>;

/// Computes the applicable modifier groups of a category
#[derive(Debug, Clone, Copy)]
pub struct ModifierResolver<'a> {
    classes: &'a ClassIndex<'a>,
    modifiers: &'a ModifierIndex,
}

impl<'a> ModifierResolver<'a> {
    #[must_use]
    pub const fn new(classes: &'a ClassIndex<'a>, modifiers: &'a ModifierIndex) -> Self {
        Self { classes, modifiers }
    }

    /// Walk from the category up to the root of its hierarchy
    ///
    /// Groups are ordered by first sighting, starting at the category itself.
    ///
    /// # Errors
    /// Fails on a reference to an undeclared modifier group, on an
    /// unresolvable superclass and on a cyclic superclass chain.
    pub fn resolve(&self, category: &ClassNode) -> Result<ResolvedGroups<'a>> {
        let mut collected: ResolvedGroups<'a> = SmallVec::new();
        let mut seen = FxHashSet::default();
        let mut excluded = FxHashSet::default();
        let mut visited = FxHashSet::default();

        let mut current = Some(category);
        let mut ancestry = 0usize;
        while let Some(class) = current {
            if !visited.insert(class.code.as_str()) {
                return Err(ClamlError::CyclicHierarchy {
                    code: category.code.clone(),
                    revisited: class.code.clone(),
                });
            }

            for group in &class.modified_by {
                let vocabulary = self.modifiers.require(group, &class.code)?;
                if seen.insert(group.as_str()) {
                    collected.push(vocabulary);
                }
            }

            for group in &class.excluded_modifiers {
                self.modifiers.require(group, &class.code)?;
                if ancestry > 0 {
                    excluded.insert(group.as_str());
                }
            }

            current = self.classes.superclass_of(class)?;
            ancestry += 1;
        }

        collected.retain(|group| !excluded.contains(group.code.as_str()));
        Ok(collected)
    }
}
