//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::processing::MembershipResult;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One line describing a membership check, coloured by outcome.
pub fn format_membership(result: &MembershipResult) -> String {
    let verdict = if result.is_member {
        "member".green()
    } else {
        "not member".red()
    };
    format!(
        "{candidate} in {cidr}: {verdict}",
        candidate = result.candidate,
        cidr = result.cidr,
    )
}

/// Print membership results, one per line.
pub fn print_membership(results: &[MembershipResult]) {
    for result in results {
        println!("{}", format_membership(result));
    }
}
