//! Output definition model
//!
//! The serialized form is the fixed envelope
//! `{ "diagnoses": { "title": ..., "definitions": [ { "code", "label" } ] } }`.

use serde::{Deserialize, Serialize};

/// One diagnosis code with its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub code: String,
    pub label: String,
}

impl Definition {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Titled, sorted table of definitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisTable {
    pub title: String,
    pub definitions: Vec<Definition>,
}

/// Top-level output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisCatalog {
    pub diagnoses: DiagnosisTable,
}

impl DiagnosisCatalog {
    /// Wrap already sorted definitions in the output envelope
    pub fn new(title: impl Into<String>, definitions: Vec<Definition>) -> Self {
        Self {
            diagnoses: DiagnosisTable {
                title: title.into(),
                definitions,
            },
        }
    }

    #[must_use]
    pub fn definitions(&self) -> &[Definition] {
        &self.diagnoses.definitions
    }

    /// Look up a definition by code
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Definition> {
        self.diagnoses
            .definitions
            .binary_search_by(|definition| definition.code.as_str().cmp(code))
            .ok()
            .map(|index| &self.diagnoses.definitions[index])
    }
}
