//! User interface module - pure output formatting, no prompts.

pub mod formatter;

pub use formatter::{
    display_changes, display_error, display_modules, display_status, display_success,
    display_warning,
};
