//! Expansion of ClaML categories into diagnosis definitions
//!
//! The modifier and class indices are built once per document. For each
//! category the resolver walks the superclass chain to find the applicable
//! modifier groups, and the expander appends every nested combination of
//! their suffixes to the category code.

pub mod assembler;
pub mod class_index;
pub mod definitions;
pub mod expander;
pub mod modifier_index;
pub mod resolver;

pub use assembler::{ConversionStats, DefinitionAssembler};
pub use class_index::ClassIndex;
pub use definitions::{DefinitionSet, Overwrite};
pub use expander::{combination_count, expand_into};
pub use modifier_index::ModifierIndex;
pub use resolver::{ModifierResolver, ResolvedGroups};
