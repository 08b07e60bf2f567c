//! Data models of the classification and of the converted output.

pub mod class;
pub mod definition;
pub mod modifier;

pub use class::{ClassKind, ClassNode};
pub use definition::{Definition, DiagnosisCatalog, DiagnosisTable};
pub use modifier::{ModifierClassDecl, ModifierEntry, ModifierGroup};
