//! Logging utilities
//!
//! Standardized messages for the start and end of a conversion.

use std::path::Path;
use std::time::Duration;

use crate::algorithm::ConversionStats;

/// Log the start of a conversion
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the document being converted
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log the completion of a conversion
///
/// # Arguments
/// * `path` - Path of the document that was converted
/// * `stats` - Summary of the conversion
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(path: &Path, stats: &ConversionStats, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully converted {} into {} definitions in {:?}",
            path.display(),
            stats.definitions,
            duration
        );
    } else {
        log::info!(
            "Successfully converted {} into {} definitions",
            path.display(),
            stats.definitions
        );
    }

    if stats.conflicting_overwrites > 0 {
        log::warn!(
            "{} codes were generated with conflicting labels; the last label was kept",
            stats.conflicting_overwrites
        );
    }
}
