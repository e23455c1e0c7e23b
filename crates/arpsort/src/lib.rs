//! Sort a device ARP table dump
//!
//! Reads the output of `show ip arp` saved to a text file, keeps the rows
//! that carry a MAC address, orders them numerically by IP and prints:
//!
//! - the sorted IP list
//! - IP and MAC pairs
//! - IP, MAC and VLAN
//! - IP, MAC and manufacturer
//!
//! The MAC to IP map is then exported as JSON for the interface
//! cross-reference tool.
//!
//! # Architecture
//!
//! ```text
//! arp.txt ──▶ filter ──▶ record ──▶ table ──┬──▶ report ──▶ stdout
//!                                           │      ▲
//!                                           │     oui
//!                                           └──▶ persist ──▶ Mac2IP.json
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod oui;
pub mod persist;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod table;

pub use config::{Config, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use error::{ArpError, Result};
pub use filter::{contains_mac, filter_lines, find_mac, read_filtered};
pub use oui::{OuiDatabase, OuiVendor, UNKNOWN_MANUFACTURER};
pub use persist::{load_mac_map, write_mac_map};
pub use pipeline::{build_table, run, RunSummary};
pub use record::{ArpRecord, ParsedRecord};
pub use report::Reporter;
pub use table::ArpTable;
