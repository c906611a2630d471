//! Output formatting for calculation results.
//!
//! - [`report`] - text, JSON and error rendering
//! - [`terminal`] - aligned terminal fields

mod report;
mod terminal;

pub use report::{render_error, render_json, render_text};
pub use terminal::{format_field, group_digits};
