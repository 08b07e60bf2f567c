//! Logging utilities for conversion progress

pub mod log;

pub use self::log::{log_operation_complete, log_operation_start};
