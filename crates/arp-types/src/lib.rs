//! Value types for ARP table processing.
//!
//! This crate provides type-safe representations of the primitives found in
//! a device's ARP table dump:
//!
//! - [`MacAddress`]: 48-bit Ethernet MAC addresses in any vendor notation
//! - [`MacNotation`]: the textual notations a MAC can be written in
//! - [`IpKey`]: numeric sort key for a dotted-quad IPv4 address
//! - [`VlanId`]: IEEE 802.1Q VLAN identifiers

mod ip;
mod mac;
mod vlan;

pub use ip::{ip_to_key, key_to_ip, IpKey};
pub use mac::{MacAddress, MacNotation};
pub use vlan::VlanId;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    #[error("invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(String),
}
