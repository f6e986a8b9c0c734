//! IPv4 address and prefix arithmetic.
//!
//! Addresses are plain `u32` values in host byte order, the first octet being
//! the most significant byte. All functions here are pure.

use crate::error::CidrError;
use lazy_static::lazy_static;
use regex::Regex;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // One octet 0..=255 without leading zeros.
    static ref DOTTED_QUAD: Regex = Regex::new(
        r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$"
    )
    .expect("Invalid Regex?");
}

/// Validate a prefix length, returning it as `u8` in `0..=32`.
pub(crate) fn checked_prefix(prefix_len: i32) -> Result<u8, CidrError> {
    u8::try_from(prefix_len)
        .ok()
        .filter(|len| *len <= MAX_LENGTH)
        .ok_or(CidrError::InvalidPrefixLength(prefix_len.into()))
}

/// Mask for an already validated prefix length.
pub(crate) fn mask_bits(len: u8) -> u32 {
    debug_assert!(len <= MAX_LENGTH, "prefix length {len} > 32");
    let right_len = MAX_LENGTH - len;
    // Shift in 64 bits so that /0 does not shift a u32 by 32.
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Host count for an already validated prefix length.
pub(crate) fn host_bits_count(len: u8) -> u64 {
    if len >= MAX_LENGTH - 1 {
        // /31 and /32 have no addresses left once network and broadcast are excluded.
        0
    } else {
        (1u64 << (MAX_LENGTH - len)) - 2
    }
}

/// Convert a CIDR prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::mask_from_prefix;
/// assert_eq!(mask_from_prefix(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(mask_from_prefix(0).unwrap(), 0);
/// assert!(mask_from_prefix(33).is_err());
/// ```
pub fn mask_from_prefix(prefix_len: i32) -> Result<u32, CidrError> {
    let len = checked_prefix(prefix_len)?;
    Ok(mask_bits(len))
}

/// Host-bit mask, the bitwise complement of [`mask_from_prefix`].
pub fn wildcard_from_prefix(prefix_len: i32) -> Result<u32, CidrError> {
    Ok(!mask_from_prefix(prefix_len)?)
}

/// Recover the prefix length from a subnet mask such as `0xFFFFF000`.
///
/// Masks whose one-bits are not a contiguous leading run are rejected.
pub fn prefix_from_mask(mask: u32) -> Result<u8, CidrError> {
    if mask.leading_ones() + mask.trailing_zeros() == MAX_LENGTH as u32 {
        Ok(mask.leading_ones() as u8)
    } else {
        Err(CidrError::InvalidSubnetMask(mask))
    }
}

/// Split an address into its four octets, most significant first.
pub fn to_octets(addr: u32) -> [u8; 4] {
    addr.to_be_bytes()
}

/// Assemble an address from four octets, most significant first.
pub fn from_octets(octets: [u8; 4]) -> u32 {
    u32::from_be_bytes(octets)
}

/// Parse strict dotted-decimal notation into an address.
///
/// Exactly four decimal octets, no leading zeros, no surrounding whitespace.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::parse_address;
/// assert_eq!(parse_address("192.168.2.10").unwrap(), 3232236042);
/// assert!(parse_address("256.1.1.1").is_err());
/// ```
pub fn parse_address(input: &str) -> Result<u32, CidrError> {
    let invalid = || CidrError::InvalidAddressFormat(input.to_string());

    let caps = DOTTED_QUAD.captures(input).ok_or_else(|| {
        log::debug!("parse_address() rejected {input:?}");
        invalid()
    })?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps
            .get(i + 1)
            .ok_or_else(invalid)?
            .as_str()
            .parse()
            .map_err(|_| invalid())?;
    }
    Ok(from_octets(octets))
}

/// Format an address as canonical "A.B.C.D".
pub fn format_address(addr: u32) -> String {
    let [a, b, c, d] = to_octets(addr);
    format!("{a}.{b}.{c}.{d}")
}

/// Network id of `addr`, i.e. the address with all host bits cleared.
pub fn network_id(addr: u32, prefix_len: i32) -> Result<u32, CidrError> {
    let mask = mask_from_prefix(prefix_len)?;
    Ok(addr & mask)
}

/// Broadcast address of `addr`, i.e. the address with all host bits set.
pub fn broadcast_address(addr: u32, prefix_len: i32) -> Result<u32, CidrError> {
    let mask = mask_from_prefix(prefix_len)?;
    Ok(addr | !mask)
}

/// Number of usable hosts in a subnet, excluding network and broadcast.
///
/// /31 and /32 subnets report 0.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::host_cardinality;
/// assert_eq!(host_cardinality(24).unwrap(), 254);
/// assert_eq!(host_cardinality(31).unwrap(), 0);
/// ```
pub fn host_cardinality(prefix_len: i32) -> Result<u64, CidrError> {
    let len = checked_prefix(prefix_len)?;
    Ok(host_bits_count(len))
}

/// Check whether `candidate` lies in the subnet `network`/`prefix_len`.
///
/// `network` is masked before comparing, so any address inside the subnet
/// identifies it, not only its network id.
pub fn is_member(network: u32, prefix_len: i32, candidate: u32) -> Result<bool, CidrError> {
    let mask = mask_from_prefix(prefix_len)?;
    let member = candidate & mask == network & mask;
    log::trace!(
        "is_member({}/{prefix_len}, {}) = {member}",
        format_address(network),
        format_address(candidate)
    );
    Ok(member)
}
