//! Run configuration

use arp_types::MacAddress;
use std::path::PathBuf;

/// Default input file, relative to the working directory
pub const DEFAULT_INPUT: &str = "arp.txt";

/// Default output file consumed by the interface cross-reference tool
pub const DEFAULT_OUTPUT: &str = "Mac2IP.json";

/// Settings for one batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `show ip arp` dump to read
    pub input: PathBuf,
    /// Where the MAC to IP map is written
    pub output: PathBuf,
    /// MACs whose IP is called out after the VLAN report
    pub watch: Vec<MacAddress>,
    /// Wireshark `manuf` file replacing the bundled OUI table
    pub manuf: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            watch: Vec::new(),
            manuf: None,
        }
    }
}
