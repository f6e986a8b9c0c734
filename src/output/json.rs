//! JSON output for subnet summaries.

use crate::processing::SubnetSummary;

/// Render summaries as a pretty-printed JSON array.
pub fn to_json(rows: &[SubnetSummary]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

/// Print summaries as JSON to stdout.
pub fn print_json(rows: &[SubnetSummary]) -> Result<(), serde_json::Error> {
    println!("{}", to_json(rows)?);
    Ok(())
}
