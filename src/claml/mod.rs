//! ClaML (Classification Markup Language) input
//!
//! Only the elements the converter uses are kept: `Class` with its
//! `SuperClass`, `ModifiedBy`, `ExcludeModifier` and preferred `Rubric`
//! children, `Modifier`, and `ModifierClass`.

pub mod document;
pub mod reader;

pub use document::ClamlDocument;
pub use reader::ClamlReader;
