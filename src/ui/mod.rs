//! User interface module - console output.
//!
//! There is no logging framework: lifecycle lines, warnings, and errors are
//! printed through the `formatter` functions.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_resolved, display_status, display_success,
    format_resolved,
};
