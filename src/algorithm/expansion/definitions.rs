//! Accumulator for generated definitions.

use std::collections::hash_map::Entry;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::models::Definition;

/// A code generated more than once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overwrite {
    pub code: String,
    /// Label that was replaced
    pub previous: String,
    /// Label that was kept
    pub label: String,
}

impl Overwrite {
    /// Whether the two generation paths disagree on the label
    #[must_use]
    pub fn changes_label(&self) -> bool {
        self.previous != self.label
    }
}

/// Definitions keyed by code, last write wins
///
/// Every replaced entry is recorded so that conflicting generation paths can
/// be reported for review.
#[derive(Debug, Clone, Default)]
pub struct DefinitionSet {
    definitions: FxHashMap<String, String>,
    overwrites: Vec<Overwrite>,
}

impl DefinitionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: String, label: String) {
        match self.definitions.entry(code) {
            Entry::Occupied(mut entry) => {
                let previous = entry.insert(label.clone());
                self.overwrites.push(Overwrite {
                    code: entry.key().clone(),
                    previous,
                    label,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(label);
            }
        }
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.definitions.get(code).map(String::as_str)
    }

    /// Replaced entries, in the order they were replaced
    #[must_use]
    pub fn overwrites(&self) -> &[Overwrite] {
        &self.overwrites
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in ascending byte order of their codes
    #[must_use]
    pub fn into_sorted(self) -> Vec<Definition> {
        self.definitions
            .into_iter()
            .sorted_unstable_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(code, label)| Definition { code, label })
            .collect()
    }
}
