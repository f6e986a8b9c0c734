//! Address arithmetic and value types.
//!
//! - [`ipv4`] functions work on raw `u32` addresses and prefix lengths
//! - [`Cidr`] wraps an address and prefix length in "A.B.C.D/N" form

mod cidr;
mod ipv4;

// Re-export public types
pub use cidr::Cidr;
pub use ipv4::{
    broadcast_address, format_address, from_octets, host_cardinality, is_member,
    mask_from_prefix, network_id, parse_address, prefix_from_mask, to_octets,
    wildcard_from_prefix, MAX_LENGTH,
};
