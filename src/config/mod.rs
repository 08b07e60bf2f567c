//! Configuration for the ClaML converter.

use std::path::PathBuf;

/// Default location of the classification document
pub const DEFAULT_INPUT: &str = "cim10.xml";

/// Default title written into the output envelope
pub const DEFAULT_TITLE: &str = "CIM-10";

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Path of the ClaML document to read
    pub input_path: PathBuf,
    /// Title of the diagnosis table in the output envelope
    pub title: String,
    /// Separator character removed from class and modifier codes
    pub separator: char,
    /// Number of spaces per indentation level in the JSON output
    pub indent: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            title: DEFAULT_TITLE.to_string(),
            separator: '.',
            indent: 4,
        }
    }
}

impl ConverterConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the classification from another path
    #[must_use]
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Use another envelope title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Use another code separator
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Use another JSON indentation width
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
