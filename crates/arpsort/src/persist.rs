//! MAC to IP map export
//!
//! The file is a flat JSON object read by the interface cross-reference
//! tool:
//!
//! ```json
//! {"0012.00f3.febf":"10.53.250.1","1060.4b9d.db68":"10.53.250.2"}
//! ```
//!
//! Keys are MACs exactly as the device printed them. Entries are written in
//! ascending IP order so identical input always yields identical bytes. The
//! file is truncated and rewritten in place; an interrupted write can leave
//! it incomplete.

use crate::error::{ArpError, Result};
use crate::table::ArpTable;
use serde::de::Error as _;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, instrument};

/// Writes the table's MAC to IP map to `path`, replacing any existing file
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_mac_map(path: &Path, table: &ArpTable) -> Result<()> {
    let map: Map<String, Value> = table
        .mac_to_ip()
        .into_iter()
        .map(|(mac, key)| (mac.to_string(), Value::String(key.to_string())))
        .collect();
    let json = serde_json::to_string(&map)?;

    let write_failure = |source: io::Error| ArpError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_failure)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes()).map_err(write_failure)?;
    writer.flush().map_err(write_failure)?;

    info!(entries = map.len(), "Wrote MAC to IP map");
    Ok(())
}

/// Reads a MAC to IP map back, preserving file order
pub fn load_mac_map(path: &Path) -> Result<Vec<(String, String)>> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ArpError::InputMissing {
            path: path.to_path_buf(),
        },
        _ => ArpError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let map: Map<String, Value> = serde_json::from_str(&text)?;
    map.into_iter()
        .map(|(mac, ip)| match ip {
            Value::String(ip) => Ok((mac, ip)),
            other => Err(ArpError::Serialize(serde_json::Error::custom(format!(
                "value for {} is not a string: {}",
                mac, other
            )))),
        })
        .collect()
}
