//! ARP record extraction from `show ip arp` rows
//!
//! Rows are split on whitespace into named columns instead of being sliced
//! at fixed character offsets:
//!
//! ```text
//! Protocol  Address          Age (min)  Hardware Addr   Type   Interface
//! Internet  10.53.250.4             3   1060.4b9f.62f8  ARPA   Vlan250
//! ```

use crate::error::ArpError;
use crate::filter::{find_mac, is_mac};
use arp_types::{ip_to_key, MacAddress, VlanId};
use tracing::debug;

/// Number of columns in a well-formed Cisco ARP row
pub const ARP_COLUMNS: usize = 6;

/// One row of the ARP table
///
/// Every field is the raw text of its column and may be empty when the row
/// was malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArpRecord {
    /// Protocol column (`Internet`)
    pub protocol: String,
    /// Dotted-quad IPv4 literal
    pub ip: String,
    /// Age in minutes, `-` for the device's own addresses
    pub age: String,
    /// MAC exactly as printed by the device
    pub mac: String,
    /// Encapsulation column (`ARPA`)
    pub encapsulation: String,
    /// Interface column (`Vlan250`)
    pub interface: String,
    /// Interface with the `Vlan` prefix removed
    pub vlan: String,
}

/// Result of parsing one filtered line
#[derive(Debug)]
pub struct ParsedRecord {
    pub record: ArpRecord,
    /// Set when the line did not have the expected layout; the record then
    /// holds whatever could be recovered
    pub malformed: Option<ArpError>,
}

impl ArpRecord {
    /// Parses a filtered line into a record
    ///
    /// Never fails: a line with an unexpected column count, or without a MAC
    /// in the hardware address column, degrades to a best-effort record with
    /// blank fields and a `MalformedRecord` note.
    pub fn parse(line: &str) -> ParsedRecord {
        let line = line.trim_end_matches(['\r', '\n']);
        let columns: Vec<&str> = line.split_whitespace().collect();

        let reason = match columns[..] {
            [protocol, ip, age, mac, encapsulation, interface] if is_mac(mac) => {
                let record = ArpRecord {
                    protocol: protocol.to_string(),
                    ip: ip.to_string(),
                    age: age.to_string(),
                    mac: mac.to_string(),
                    encapsulation: encapsulation.to_string(),
                    interface: interface.to_string(),
                    vlan: VlanId::strip_interface_prefix(interface).to_string(),
                };
                if record.vlan_id().is_none() {
                    debug!(interface, "ARP entry is not on a VLAN interface");
                }
                return ParsedRecord {
                    record,
                    malformed: None,
                };
            }
            [_, _, _, mac, _, _] => format!("hardware address column {mac:?} is not a MAC"),
            _ => format!(
                "expected {} columns, found {}",
                ARP_COLUMNS,
                columns.len()
            ),
        };

        ParsedRecord {
            record: Self::recover(line, &columns),
            malformed: Some(ArpError::MalformedRecord {
                line: line.to_string(),
                reason,
            }),
        }
    }

    fn recover(line: &str, columns: &[&str]) -> ArpRecord {
        let protocol = columns
            .first()
            .filter(|c| c.eq_ignore_ascii_case("internet"))
            .copied()
            .unwrap_or_default();

        let ip = columns
            .iter()
            .find(|c| ip_to_key(c).is_ok())
            .or_else(|| if protocol.is_empty() { None } else { columns.get(1) })
            .copied()
            .unwrap_or_default();

        let interface = columns
            .last()
            .filter(|c| VlanId::strip_interface_prefix(c).len() < c.len())
            .copied()
            .unwrap_or_default();

        ArpRecord {
            protocol: protocol.to_string(),
            ip: ip.to_string(),
            mac: find_mac(line).unwrap_or_default().to_string(),
            interface: interface.to_string(),
            vlan: VlanId::strip_interface_prefix(interface).to_string(),
            ..ArpRecord::default()
        }
    }

    /// MAC followed by the VLAN identifier, as shown in the VLAN report
    pub fn mac_and_vlan(&self) -> String {
        format!("{}  {}", self.mac, self.vlan)
    }

    /// Parsed MAC, if the column holds a recognised notation
    pub fn mac_address(&self) -> Option<MacAddress> {
        self.mac.parse().ok()
    }

    /// Parsed VLAN, if the interface is a VLAN interface
    pub fn vlan_id(&self) -> Option<VlanId> {
        self.interface.parse().ok()
    }
}
