//! Manufacturer lookup from a MAC's OUI prefix
//!
//! The table uses Wireshark's `manuf` format. A small subset is bundled with
//! the crate; a complete file can be loaded at runtime instead.

use crate::error::{ArpError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

const BUNDLED_MANUF: &str = include_str!("../data/manuf");

/// Shown in reports when no vendor matches
pub const UNKNOWN_MANUFACTURER: &str = "Unknown";

const MAC_BITS: u8 = 48;

/// Vendor names for one registered prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OuiVendor {
    /// Abbreviated name (`Cisco`)
    pub short_name: String,
    /// Full organization name, when the database has one
    pub organization: Option<String>,
}

/// Prefix to vendor table with longest-prefix matching
#[derive(Debug, Clone, Default)]
pub struct OuiDatabase {
    /// One map per prefix length, longest first; keys are the prefix bits
    by_length: Vec<(u8, HashMap<u64, OuiVendor>)>,
}

impl OuiDatabase {
    /// Database built from the bundled subset
    pub fn bundled() -> Self {
        Self::parse_manuf(BUNDLED_MANUF)
    }

    /// Loads a Wireshark `manuf` file
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_manuf_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ArpError::OuiDatabase {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self::parse_manuf(&text);
        info!(prefixes = db.len(), "Loaded OUI database");
        Ok(db)
    }

    /// Parses `manuf` text, skipping lines it cannot understand
    pub fn parse_manuf(text: &str) -> Self {
        let mut db = OuiDatabase::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_manuf_line(line) {
                Some((prefix, bits, vendor)) => db.insert(prefix, bits, vendor),
                None => debug!(line, "Skipping unparseable manuf line"),
            }
        }

        db
    }

    fn insert(&mut self, prefix: u64, bits: u8, vendor: OuiVendor) {
        let pos = match self.by_length.iter().position(|(len, _)| *len <= bits) {
            Some(pos) if self.by_length[pos].0 == bits => pos,
            Some(pos) => {
                self.by_length.insert(pos, (bits, HashMap::new()));
                pos
            }
            None => {
                self.by_length.push((bits, HashMap::new()));
                self.by_length.len() - 1
            }
        };
        self.by_length[pos].1.insert(prefix, vendor);
    }

    /// Number of registered prefixes
    pub fn len(&self) -> usize {
        self.by_length.iter().map(|(_, map)| map.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the vendor owning the longest matching prefix of `mac`
    ///
    /// `mac` may be in any notation, or even truncated; only as many bits as
    /// could be read are matched. Malformed input simply finds nothing.
    pub fn vendor(&self, mac: &str) -> Option<&OuiVendor> {
        let (value, known_bits) = leading_bits(mac)?;

        let found = self
            .by_length
            .iter()
            .filter(|(bits, _)| *bits <= known_bits)
            .find_map(|(bits, map)| map.get(&(value >> (MAC_BITS - bits))));

        debug!(mac, found = found.is_some(), "OUI lookup");
        found
    }

    /// Short vendor name for `mac`, if known
    pub fn lookup(&self, mac: &str) -> Option<&str> {
        self.vendor(mac).map(|v| v.short_name.as_str())
    }

    /// Short vendor name for `mac`, or [`UNKNOWN_MANUFACTURER`]
    pub fn manufacturer(&self, mac: &str) -> &str {
        self.lookup(mac).unwrap_or(UNKNOWN_MANUFACTURER)
    }
}

/// Reads the leading hex digits of a MAC in any notation
///
/// Returns the value left-aligned in 48 bits and how many bits were read.
/// At least a full OUI (24 bits) is required.
fn leading_bits(mac: &str) -> Option<(u64, u8)> {
    let digits: Vec<u32> = mac
        .trim()
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | '.'))
        .map_while(|c| c.to_digit(16))
        .take(12)
        .collect();

    if digits.len() < 6 {
        return None;
    }

    let value = digits
        .iter()
        .fold(0u64, |acc, d| (acc << 4) | u64::from(*d));
    let known_bits = (digits.len() * 4) as u8;
    Some((value << (MAC_BITS - known_bits), known_bits))
}

fn parse_manuf_line(line: &str) -> Option<(u64, u8, OuiVendor)> {
    let (prefix_field, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();

    let (short_name, organization) = match rest.split_once('\t') {
        Some((short, long)) => (short.trim(), Some(long.trim())),
        None => match rest.split_once(char::is_whitespace) {
            Some((short, long)) => (short, Some(long.trim())),
            None => (rest, None),
        },
    };
    if short_name.is_empty() {
        return None;
    }

    let (prefix_text, mask) = match prefix_field.split_once('/') {
        Some((prefix, bits)) => (prefix, Some(bits.parse::<u8>().ok()?)),
        None => (prefix_field, None),
    };

    let octets = prefix_text
        .split([':', '-', '.'])
        .map(|o| u8::from_str_radix(o, 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    if octets.is_empty() || octets.len() > 6 {
        return None;
    }

    let bits = mask.unwrap_or((octets.len() * 8) as u8);
    if bits == 0 || bits > MAC_BITS {
        return None;
    }

    let full = octets
        .iter()
        .chain(std::iter::repeat(&0u8))
        .take(6)
        .fold(0u64, |acc, o| (acc << 8) | u64::from(*o));

    Some((
        full >> (MAC_BITS - bits),
        bits,
        OuiVendor {
            short_name: short_name.to_string(),
            organization: organization.filter(|o| !o.is_empty()).map(str::to_string),
        },
    ))
}
