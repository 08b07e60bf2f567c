//! Assembly of the complete definition catalog.

use std::fmt;

use log::{debug, info, warn};

use crate::claml::ClamlDocument;
use crate::config::ConverterConfig;
use crate::error::{ClamlError, Result};
use crate::models::{ClassNode, DiagnosisCatalog};

use super::class_index::ClassIndex;
use super::definitions::DefinitionSet;
use super::expander::expand_into;
use super::modifier_index::ModifierIndex;
use super::resolver::ModifierResolver;

/// Summary of one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Classes of any kind in the document
    pub classes: usize,
    /// Classes of kind `category`
    pub categories: usize,
    /// Declared modifier groups
    pub modifier_groups: usize,
    /// Definitions in the catalog
    pub definitions: usize,
    /// Codes generated more than once
    pub overwrites: usize,
    /// Overwrites that replaced a different label
    pub conflicting_overwrites: usize,
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} definitions from {} categories ({} classes, {} modifier groups, {} overwrites, {} conflicting)",
            self.definitions,
            self.categories,
            self.classes,
            self.modifier_groups,
            self.overwrites,
            self.conflicting_overwrites
        )
    }
}

/// Drives resolution and expansion over every category of a document
#[derive(Debug)]
pub struct DefinitionAssembler<'a> {
    document: &'a ClamlDocument,
    config: &'a ConverterConfig,
    classes: ClassIndex<'a>,
    modifiers: ModifierIndex,
}

impl<'a> DefinitionAssembler<'a> {
    /// Build the class and modifier indices of a document
    pub fn new(document: &'a ClamlDocument, config: &'a ConverterConfig) -> Result<Self> {
        let modifiers = ModifierIndex::build(
            &document.modifiers,
            &document.modifier_classes,
            config.separator,
        )?;
        let classes = ClassIndex::build(&document.classes);

        debug!(
            "Indexed {} classes and {} modifier groups",
            classes.len(),
            modifiers.len()
        );

        Ok(Self {
            document,
            config,
            classes,
            modifiers,
        })
    }

    /// Generate the definitions of every category, in declaration order
    pub fn collect(&self) -> Result<DefinitionSet> {
        let resolver = ModifierResolver::new(&self.classes, &self.modifiers);
        let mut definitions = DefinitionSet::new();

        for category in self.document.categories() {
            self.add_category(&resolver, category, &mut definitions)?;
        }

        Ok(definitions)
    }

    /// Generate the definitions of one category: its own code, then every
    /// combination with its resolved modifier groups
    pub fn add_category(
        &self,
        resolver: &ModifierResolver<'_>,
        category: &ClassNode,
        definitions: &mut DefinitionSet,
    ) -> Result<()> {
        let code = category.normalized_code(self.config.separator);
        let label = category
            .label
            .as_deref()
            .ok_or_else(|| ClamlError::missing_label("Category", &category.code))?;

        definitions.insert(code.clone(), label.to_string());

        let groups = resolver.resolve(category)?;
        expand_into(&code, label, &groups, definitions);

        Ok(())
    }

    /// Produce the sorted catalog and its statistics
    pub fn assemble(&self) -> Result<(DiagnosisCatalog, ConversionStats)> {
        let definitions = self.collect()?;

        let mut conflicting = 0;
        for overwrite in definitions.overwrites() {
            if overwrite.changes_label() {
                conflicting += 1;
                warn!(
                    "Code {} generated twice: {:?} replaced by {:?}",
                    overwrite.code, overwrite.previous, overwrite.label
                );
            } else {
                debug!("Code {} generated twice with the same label", overwrite.code);
            }
        }

        let stats = ConversionStats {
            classes: self.document.classes.len(),
            categories: self.document.categories().count(),
            modifier_groups: self.modifiers.len(),
            definitions: definitions.len(),
            overwrites: definitions.overwrites().len(),
            conflicting_overwrites: conflicting,
        };
        info!("Assembled {stats}");

        let catalog = DiagnosisCatalog::new(self.config.title.clone(), definitions.into_sorted());
        Ok((catalog, stats))
    }
}
