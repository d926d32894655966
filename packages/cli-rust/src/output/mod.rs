//! Output utilities for CLI commands
//!
//! Terminal helpers for per-alias result lines, final status lines and
//! centralized error display.

pub mod errors;
pub mod report;

pub use errors::show_error;
pub use report::{invalid_lines, report_lines, status_line};
