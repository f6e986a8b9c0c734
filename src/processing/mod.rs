//! Subnet data processing logic.
//!
//! - [`summary`] - Per-subnet summary rows and membership checks

mod summary;

// Re-export public functions
pub use summary::{
    check_membership, check_membership_rows, summarize, MembershipResult, SubnetSummary,
};
