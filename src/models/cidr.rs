//! CIDR notation ("A.B.C.D/N") value type.

use super::ipv4::{
    format_address, host_bits_count, mask_bits, parse_address, MAX_LENGTH,
};
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// IPv4 address with a prefix length in `0..=32`.
///
/// The address is kept as given, host bits included; use
/// [`Cidr::normalized`] to clear them.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: Ipv4Addr,
    prefix_len: u8,
}

impl Cidr {
    /// Create a new [`Cidr`], rejecting prefix lengths above 32.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<Cidr, CidrError> {
        if prefix_len > MAX_LENGTH {
            return Err(CidrError::InvalidPrefixLength(prefix_len.into()));
        }
        Ok(Cidr { addr, prefix_len })
    }

    /// Parse "A.B.C.D/N", or a bare "A.B.C.D" as a /32.
    pub fn parse(addr_cidr: &str) -> Result<Cidr, CidrError> {
        let mut parts = addr_cidr.split('/');
        let addr_part = parts.next().unwrap_or_default();
        let prefix_part = parts.next();
        if parts.next().is_some() {
            return Err(CidrError::InvalidCidrFormat(addr_cidr.to_string()));
        }

        let addr = Ipv4Addr::from(parse_address(addr_part)?);
        let prefix_len = match prefix_part {
            None => MAX_LENGTH,
            Some(p) => parse_prefix(p, addr_cidr)?,
        };
        Cidr::new(addr, prefix_len)
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    fn mask(&self) -> u32 {
        mask_bits(self.prefix_len)
    }

    /// Subnet mask, e.g. 255.255.255.0 for a /24.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask())
    }

    /// Host mask, e.g. 0.0.0.255 for a /24.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.mask())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask())
    }

    /// Same subnet with the host bits of the address cleared.
    pub fn normalized(&self) -> Cidr {
        Cidr {
            addr: self.network(),
            prefix_len: self.prefix_len,
        }
    }

    /// Number of usable hosts; 0 for /31 and /32.
    pub fn hosts(&self) -> u64 {
        host_bits_count(self.prefix_len)
    }

    /// First and last usable host address, if the subnet has any.
    pub fn host_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        if self.hosts() == 0 {
            return None;
        }
        let first = u32::from(self.network()) + 1;
        let last = u32::from(self.broadcast()) - 1;
        Some((Ipv4Addr::from(first), Ipv4Addr::from(last)))
    }

    /// Check if `ip` falls inside this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & self.mask() == u32::from(self.network())
    }

    /// The equally sized subnet directly after this one.
    pub fn next_subnet(&self) -> Result<Cidr, CidrError> {
        let subnet_size = 1u64 << (MAX_LENGTH - self.prefix_len);
        let next = u64::from(u32::from(self.network())) + subnet_size;
        let next = u32::try_from(next)
            .map_err(|_| CidrError::AddressSpaceExhausted(self.to_string()))?;
        Ok(Cidr {
            addr: Ipv4Addr::from(next),
            prefix_len: self.prefix_len,
        })
    }

    /// Split into the subnets of length `new_prefix`, in address order.
    pub fn subnets(&self, new_prefix: u8) -> Result<impl Iterator<Item = Cidr>, CidrError> {
        if new_prefix < self.prefix_len || new_prefix > MAX_LENGTH {
            return Err(CidrError::InvalidPrefixLength(new_prefix.into()));
        }
        let base = u64::from(u32::from(self.network()));
        let count = 1u64 << (new_prefix - self.prefix_len);
        let step = MAX_LENGTH - new_prefix;
        log::debug!("split {self} into {count} x /{new_prefix}");

        Ok((0..count).map(move |i| Cidr {
            // base + (count - 1) * size stays below 2^32.
            addr: Ipv4Addr::from((base + (i << step)) as u32),
            prefix_len: new_prefix,
        }))
    }
}

fn parse_prefix(prefix: &str, addr_cidr: &str) -> Result<u8, CidrError> {
    let invalid = || CidrError::InvalidCidrFormat(addr_cidr.to_string());
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // Same rule as address octets: no leading zeros.
    if prefix.len() > 1 && prefix.starts_with('0') {
        return Err(invalid());
    }
    // Digits only, so anything failing to parse is too long for an i64.
    match prefix.parse::<i64>() {
        Ok(len) if len <= i64::from(MAX_LENGTH) => Ok(len as u8),
        Ok(len) => Err(CidrError::InvalidPrefixLength(len)),
        Err(_) => Err(invalid()),
    }
}

impl FromStr for Cidr {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::parse(s)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}/{}",
            format_address(u32::from(self.addr)),
            self.prefix_len
        )
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cidr(s: &str) -> Cidr {
        Cidr::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let c = cidr("192.168.2.10/20");
        assert_eq!(c.addr(), Ipv4Addr::new(192, 168, 2, 10));
        assert_eq!(c.prefix_len(), 20);
        assert_eq!(c.to_string(), "192.168.2.10/20");

        assert_eq!(cidr("10.1.2.3"), cidr("10.1.2.3/32"));
        assert_eq!("0.0.0.0/0".parse::<Cidr>().unwrap().prefix_len(), 0);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Cidr::parse("10.0.0.0/33").unwrap_err(),
            CidrError::InvalidPrefixLength(33)
        );
        assert_eq!(
            Cidr::parse("10.0.0.0/300").unwrap_err(),
            CidrError::InvalidPrefixLength(300)
        );
        assert_eq!(
            Cidr::parse("10.0.0/24").unwrap_err(),
            CidrError::InvalidAddressFormat("10.0.0".to_string())
        );
        assert_eq!(
            Cidr::parse("10.0.0.0/24/8").unwrap_err(),
            CidrError::InvalidCidrFormat("10.0.0.0/24/8".to_string())
        );
        assert!(matches!(
            Cidr::parse("10.0.0.0/"),
            Err(CidrError::InvalidCidrFormat(_))
        ));
        assert!(matches!(
            Cidr::parse("10.0.0.0/-1"),
            Err(CidrError::InvalidCidrFormat(_))
        ));
        assert!(Cidr::parse("").is_err());
        assert!(Cidr::new(Ipv4Addr::UNSPECIFIED, 33).is_err());
    }

    #[test]
    fn test_parse_prefix_leading_zero() {
        assert_eq!(
            Cidr::parse("10.0.0.0/024").unwrap_err(),
            CidrError::InvalidCidrFormat("10.0.0.0/024".to_string())
        );
        assert_eq!(
            Cidr::parse("10.0.0.0/00").unwrap_err(),
            CidrError::InvalidCidrFormat("10.0.0.0/00".to_string())
        );
        assert_eq!(cidr("10.0.0.0/0").prefix_len(), 0);
        assert_eq!(
            Cidr::parse("01.0.0.0/24").unwrap_err(),
            CidrError::InvalidAddressFormat("01.0.0.0".to_string())
        );
    }

    #[test]
    fn test_parse_prefix_huge() {
        assert_eq!(
            Cidr::parse("10.0.0.0/99999999999999999999999").unwrap_err(),
            CidrError::InvalidCidrFormat("10.0.0.0/99999999999999999999999".to_string())
        );
        assert_eq!(
            Cidr::parse("10.0.0.0/9223372036854775808").unwrap_err(),
            CidrError::InvalidCidrFormat("10.0.0.0/9223372036854775808".to_string())
        );
        assert_eq!(
            Cidr::parse("10.0.0.0/9223372036854775807").unwrap_err(),
            CidrError::InvalidPrefixLength(i64::MAX)
        );
    }

    #[test]
    fn test_network_broadcast_masks() {
        let c = cidr("192.168.2.10/24");
        assert_eq!(c.network(), Ipv4Addr::new(192, 168, 2, 0));
        assert_eq!(c.broadcast(), Ipv4Addr::new(192, 168, 2, 255));
        assert_eq!(c.netmask(), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(c.wildcard(), Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(c.normalized(), cidr("192.168.2.0/24"));

        let all = cidr("8.8.8.8/0");
        assert_eq!(all.network(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(all.broadcast(), Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(all.hosts(), 4294967294);
    }

    #[test]
    fn test_host_range() {
        assert_eq!(
            cidr("10.0.0.0/30").host_range(),
            Some((Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)))
        );
        assert_eq!(cidr("10.0.0.0/24").hosts(), 254);
        assert_eq!(cidr("10.0.0.0/31").host_range(), None);
        assert_eq!(cidr("10.0.0.7/32").host_range(), None);
        assert_eq!(cidr("10.0.0.7/32").hosts(), 0);
    }

    #[test]
    fn test_contains() {
        let c = cidr("192.168.1.77/24");
        assert!(c.contains(Ipv4Addr::new(192, 168, 1, 10)));
        assert!(c.contains(Ipv4Addr::new(192, 168, 1, 0)));
        assert!(!c.contains(Ipv4Addr::new(192, 168, 2, 10)));
    }

    #[test]
    fn test_next_subnet() {
        assert_eq!(
            cidr("10.1.1.0/28").next_subnet().unwrap(),
            cidr("10.1.1.16/28")
        );
        assert_eq!(
            cidr("10.2.3.4/16").next_subnet().unwrap(),
            cidr("10.3.0.0/16")
        );
        assert_eq!(
            cidr("192.168.1.0/8").next_subnet().unwrap(),
            cidr("193.0.0.0/8")
        );
        assert_eq!(
            cidr("255.255.255.0/24").next_subnet().unwrap_err(),
            CidrError::AddressSpaceExhausted("255.255.255.0/24".to_string())
        );
        assert!(cidr("0.0.0.0/0").next_subnet().is_err());
    }

    #[test]
    fn test_subnets() {
        let parts: Vec<Cidr> = cidr("10.0.0.0/24").subnets(26).unwrap().collect();
        assert_eq!(
            parts,
            vec![
                cidr("10.0.0.0/26"),
                cidr("10.0.0.64/26"),
                cidr("10.0.0.128/26"),
                cidr("10.0.0.192/26"),
            ]
        );

        let same: Vec<Cidr> = cidr("10.0.0.9/24").subnets(24).unwrap().collect();
        assert_eq!(same, vec![cidr("10.0.0.0/24")]);

        let mut last = cidr("0.0.0.0/0").subnets(32).unwrap();
        assert_eq!(last.next(), Some(cidr("0.0.0.0/32")));

        assert!(cidr("10.0.0.0/24").subnets(16).is_err());
        assert!(cidr("10.0.0.0/24").subnets(33).is_err());
    }

    #[test]
    fn test_cmp() {
        let ip1 = cidr("10.0.0.1/24");
        let ip2 = cidr("10.0.0.2/24");
        let ip3 = cidr("10.0.0.1/24");
        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(cidr("10.0.0.0/8") < cidr("10.0.0.0/16"));
    }

    #[test]
    fn test_serde() {
        let c = cidr("10.18.126.0/24");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#""10.18.126.0/24""#);
        let back: Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let err = serde_json::from_str::<Cidr>(r#""10.18.126.0/40""#).unwrap_err();
        assert!(err.to_string().contains("invalid prefix length 40"));
    }
}
