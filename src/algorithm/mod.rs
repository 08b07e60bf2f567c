//! Conversion algorithms
//!
//! This module implements the resolution of inherited modifier groups and the
//! expansion of categories into combined diagnosis codes.

pub mod expansion;

pub use expansion::{ConversionStats, DefinitionAssembler, DefinitionSet};
