//! Pure formatting functions for UI output.
//!
//! Status and lifecycle lines go to stdout; errors and warnings go to stderr.
//! `console` drops the styling when the stream is not a terminal.

use console::style;
use std::fmt::Display;

use crate::boundary::BoundaryWarning;
use crate::domain::{VersionField, VersionSource};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// The lifecycle line for a resolved field, e.g. `Using versionCode 5 from LatestGitTag`.
pub fn format_resolved(field: VersionField, value: &dyn Display, source: VersionSource) -> String {
    format!("Using {} {} from {}", field, value, source)
}

/// Print the lifecycle line for a resolved field.
pub fn display_resolved(field: VersionField, value: &dyn Display, source: VersionSource) {
    println!("{}", format_resolved(field, value, source));
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
///
/// # Arguments
/// * `warning` - The boundary warning to display
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), warning);
}
