//! Error type shared by all subnet calculations.

use thiserror::Error;

/// Everything that can go wrong while parsing or computing with IPv4 subnets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    /// Input is not strict dotted-decimal "A.B.C.D".
    #[error("invalid IPv4 address format: {0:?}")]
    InvalidAddressFormat(String),
    /// Prefix length outside 0..=32.
    #[error("invalid prefix length {0}, expected 0..=32")]
    InvalidPrefixLength(i64),
    /// Input is not "A.B.C.D/N".
    #[error("invalid CIDR notation: {0:?}")]
    InvalidCidrFormat(String),
    /// Mask bits are not a contiguous run of leading ones.
    #[error("invalid subnet mask {0:#010x}, bits must be contiguous")]
    InvalidSubnetMask(u32),
    /// Stepping past 255.255.255.255.
    #[error("no subnet after {0}, address space exhausted")]
    AddressSpaceExhausted(String),
}
