//! Utility functions shared by the reader and the expansion algorithm

pub mod logging;

/// Remove every occurrence of the separator from a declared code
///
/// # Example
/// ```
/// use cim10_claml::utils::strip_separators;
///
/// assert_eq!(strip_separators("A00.1", '.'), "A001");
/// assert_eq!(strip_separators(".9 ", '.'), "9 ");
/// ```
#[must_use]
pub fn strip_separators(code: &str, separator: char) -> String {
    code.chars().filter(|&c| c != separator).collect()
}
