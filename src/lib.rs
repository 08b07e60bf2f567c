//! Conversion of the CIM-10 ClaML classification into a flat, sorted list of
//! diagnosis code definitions, including every code combined with the suffix
//! modifiers its category inherits.

pub mod algorithm;
pub mod claml;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod utils;

use std::time::Instant;

// Re-export the most common types for easier use
pub use algorithm::{ConversionStats, DefinitionAssembler, DefinitionSet};
pub use claml::ClamlDocument;
pub use config::ConverterConfig;
pub use error::{ClamlError, Result};
pub use models::{Definition, DiagnosisCatalog};
pub use output::{to_json_string, write_catalog};

use utils::logging::{log_operation_complete, log_operation_start};

/// Convert an already parsed document
pub fn convert(
    document: &ClamlDocument,
    config: &ConverterConfig,
) -> Result<(DiagnosisCatalog, ConversionStats)> {
    DefinitionAssembler::new(document, config)?.assemble()
}

/// Convert an in-memory ClaML document
pub fn convert_str(xml: &str, config: &ConverterConfig) -> Result<DiagnosisCatalog> {
    let document = ClamlDocument::parse(xml)?;
    convert(&document, config).map(|(catalog, _)| catalog)
}

/// Load the configured ClaML document and convert it
pub fn convert_file(config: &ConverterConfig) -> Result<DiagnosisCatalog> {
    let start = Instant::now();
    log_operation_start("Converting ClaML classification", &config.input_path);

    let document = ClamlDocument::load(&config.input_path)?;
    let (catalog, stats) = convert(&document, config)?;

    log_operation_complete(&config.input_path, &stats, Some(start.elapsed()));
    Ok(catalog)
}
