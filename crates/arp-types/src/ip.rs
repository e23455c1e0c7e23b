//! IPv4 sort key with a lossless dotted-quad codec.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Numeric form of an IPv4 address, used to order addresses by value
/// rather than by their text (`10.0.0.2 < 10.0.0.10`).
///
/// # Examples
///
/// ```
/// use arp_types::{ip_to_key, key_to_ip};
///
/// let key = ip_to_key("10.53.250.10").unwrap();
/// assert_eq!(key.as_u32(), 0x0a35_fa0a);
/// assert_eq!(key_to_ip(key), "10.53.250.10");
/// assert!(ip_to_key("10.53.250.2").unwrap() < key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IpKey(u32);

impl IpKey {
    pub const fn new(value: u32) -> Self {
        IpKey(value)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Parses a dotted-quad IPv4 literal into its network-order integer key.
///
/// Parsing is strict: exactly four decimal octets in 0-255, no leading
/// zeros and no surrounding whitespace.
pub fn ip_to_key(ip: &str) -> Result<IpKey, ParseError> {
    ip.parse()
}

/// Renders a key back into dotted-quad notation. Total over `u32`.
pub fn key_to_ip(key: IpKey) -> String {
    key.to_string()
}

impl fmt::Display for IpKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ipv4Addr::from(self.0).fmt(f)
    }
}

impl FromStr for IpKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Ipv4Addr>()
            .map(IpKey::from)
            .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
    }
}

impl From<u32> for IpKey {
    fn from(value: u32) -> Self {
        IpKey(value)
    }
}

impl From<Ipv4Addr> for IpKey {
    fn from(addr: Ipv4Addr) -> Self {
        IpKey(u32::from(addr))
    }
}

impl From<IpKey> for Ipv4Addr {
    fn from(key: IpKey) -> Self {
        Ipv4Addr::from(key.0)
    }
}

impl TryFrom<String> for IpKey {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<IpKey> for String {
    fn from(key: IpKey) -> String {
        key.to_string()
    }
}
