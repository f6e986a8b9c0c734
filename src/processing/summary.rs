//! Per-subnet summary rows and membership checks.

use crate::error::CidrError;
use crate::models::{parse_address, Cidr};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything worth printing about one subnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetSummary {
    /// Subnet as given on input.
    pub cidr: Cidr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    /// First usable host, None for /31 and /32.
    pub first_host: Option<Ipv4Addr>,
    /// Last usable host, None for /31 and /32.
    pub last_host: Option<Ipv4Addr>,
    /// Number of usable hosts.
    pub hosts: u64,
}

impl SubnetSummary {
    pub fn from_cidr(cidr: &Cidr) -> SubnetSummary {
        let range = cidr.host_range();
        SubnetSummary {
            cidr: *cidr,
            network: cidr.network(),
            broadcast: cidr.broadcast(),
            netmask: cidr.netmask(),
            wildcard: cidr.wildcard(),
            first_host: range.map(|(first, _)| first),
            last_host: range.map(|(_, last)| last),
            hosts: cidr.hosts(),
        }
    }
}

/// Outcome of checking one candidate address against a subnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipResult {
    pub cidr: Cidr,
    pub candidate: Ipv4Addr,
    pub is_member: bool,
}

/// Build a summary for every CIDR string in `inputs`.
///
/// Stops at the first input that does not parse.
pub fn summarize<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<SubnetSummary>, CidrError> {
    log::info!("#Start summarize() for {} subnets", inputs.len());

    inputs
        .iter()
        .map(|input| -> Result<SubnetSummary, CidrError> {
            let input = input.as_ref();
            let cidr = Cidr::parse(input).inspect_err(|e| {
                log::warn!("Skipping summary, cannot parse {input:?}: {e}");
            })?;
            Ok(SubnetSummary::from_cidr(&cidr))
        })
        .collect()
}

/// Check each candidate address for membership in `cidr`.
pub fn check_membership<S: AsRef<str>>(
    cidr: &Cidr,
    candidates: &[S],
) -> Result<Vec<MembershipResult>, CidrError> {
    candidates
        .iter()
        .map(|candidate| -> Result<MembershipResult, CidrError> {
            let candidate = Ipv4Addr::from(parse_address(candidate.as_ref())?);
            Ok(MembershipResult {
                cidr: *cidr,
                candidate,
                is_member: cidr.contains(candidate),
            })
        })
        .collect()
}

/// Check each candidate against every already summarised subnet, row by row.
pub fn check_membership_rows<S: AsRef<str>>(
    rows: &[SubnetSummary],
    candidates: &[S],
) -> Result<Vec<MembershipResult>, CidrError> {
    let mut results = Vec::with_capacity(rows.len() * candidates.len());
    for row in rows {
        results.extend(check_membership(&row.cidr, candidates)?);
    }
    Ok(results)
}
