//! MAC address type with multi-notation parsing and formatting.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Textual notations a MAC address is written in by network equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacNotation {
    /// `0a:0a:0a:0a:0a:0a` (Linux, most hosts).
    Colon,
    /// `0a-0a-0a-0a-0a-0a` (Windows).
    Hyphen,
    /// `0a0a.0a0a.0a0a` (Cisco IOS).
    CiscoDot,
    /// `0a0a0a-0a0a0a` (HP ProCurve).
    HpHalves,
}

impl MacNotation {
    /// Detects the notation from the grouping of `s`.
    ///
    /// Only the shape is checked here; hex digits are validated by the parser.
    pub fn detect(s: &str) -> Option<Self> {
        let grouped = |sep: char, count: usize, width: usize| {
            let parts: Vec<&str> = s.split(sep).collect();
            parts.len() == count && parts.iter().all(|p| p.len() == width)
        };

        if grouped(':', 6, 2) {
            Some(MacNotation::Colon)
        } else if grouped('-', 6, 2) {
            Some(MacNotation::Hyphen)
        } else if grouped('.', 3, 4) {
            Some(MacNotation::CiscoDot)
        } else if grouped('-', 2, 6) {
            Some(MacNotation::HpHalves)
        } else {
            None
        }
    }

    /// Returns the group separator.
    pub const fn separator(&self) -> char {
        match self {
            MacNotation::Colon => ':',
            MacNotation::Hyphen | MacNotation::HpHalves => '-',
            MacNotation::CiscoDot => '.',
        }
    }
}

/// A 48-bit Ethernet MAC address.
///
/// Parsing accepts every [`MacNotation`], case-insensitively. Display is
/// always the canonical lowercase colon form, so two spellings of the same
/// address compare and print equal.
///
/// # Examples
///
/// ```
/// use arp_types::MacAddress;
///
/// let cisco: MacAddress = "0012.00f3.febf".parse().unwrap();
/// assert_eq!(cisco.to_string(), "00:12:00:f3:fe:bf");
///
/// let hp: MacAddress = "001200-F3FEBF".parse().unwrap();
/// assert_eq!(cisco, hp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Creates a new MAC address from raw bytes.
    pub const fn new(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }

    /// Returns the raw bytes of the MAC address.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidMacAddress(s.to_string());

        let notation = MacNotation::detect(s).ok_or_else(invalid)?;
        let digits: String = s.chars().filter(|c| *c != notation.separator()).collect();
        if digits.len() != 12 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut bytes = [0u8; 6];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }

        Ok(MacAddress(bytes))
    }
}

impl TryFrom<String> for MacAddress {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> String {
        mac.to_string()
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddress(bytes)
    }
}
