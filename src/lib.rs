//! IPv4 subnet arithmetic.
//!
//! Pure functions over `u32` addresses and prefix lengths live in [`models`],
//! together with the [`models::Cidr`] value type. [`processing`] and
//! [`output`] build per-subnet summaries on top of them for the
//! `subnet-calc` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CidrError;

use cli::Invocation;
use config::{OutputFormat, Settings};
use std::error::Error;

/// Print summaries and membership checks for one invocation.
pub fn run(invocation: &Invocation, settings: &Settings) -> Result<(), Box<dyn Error>> {
    log::info!(
        "#Start run() cidrs={} members={} output={}",
        invocation.cidrs.len(),
        invocation.members.len(),
        settings.output
    );

    let rows = processing::summarize(invocation.cidrs.as_slice())?;
    match settings.output {
        OutputFormat::Csv => output::print_csv(&rows),
        OutputFormat::Json => output::print_json(&rows)?,
    }

    if !invocation.members.is_empty() {
        let results = processing::check_membership_rows(&rows, invocation.members.as_slice())?;
        output::print_membership(&results);
    }

    Ok(())
}
