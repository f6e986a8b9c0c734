//! Output formatting for subnet summaries.
//!
//! This module handles formatting and outputting summary data:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{csv_header, csv_row, print_csv};
pub use json::{print_json, to_json};
pub use terminal::{format_field, format_membership, print_membership};
