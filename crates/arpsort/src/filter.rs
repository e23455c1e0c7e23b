//! Line filter: keep only the lines of a dump that carry a MAC address
//!
//! Devices print MACs in different notations depending on vendor and model.
//! The recognised forms are:
//!
//! ```text
//! 0a:0a:0a:0a:0a:0a   0a-0a-0a-0a-0a-0a   (hosts)
//! 0a0a.0a0a.0a0a                          (Cisco)
//! 0a0a0a-0a0a0a                           (HP)
//! ```

use crate::error::{ArpError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument};

static MAC_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)([0-9A-F]{2}[-:]){5}[0-9A-F]{2}"),
        Regex::new(r"(?i)([0-9A-F]{4}\.){2}[0-9A-F]{4}"),
        Regex::new(r"(?i)[0-9A-F]{6}-[0-9A-F]{6}"),
    ]
    .map(|pattern| pattern.expect("MAC pattern is a valid regex"))
});

/// Returns true if the line contains a MAC address in any supported notation
pub fn contains_mac(line: &str) -> bool {
    MAC_PATTERNS.iter().any(|re| re.is_match(line))
}

/// Returns true if the whole token is a MAC address
pub fn is_mac(token: &str) -> bool {
    MAC_PATTERNS
        .iter()
        .any(|re| re.find(token).is_some_and(|m| m.as_str() == token))
}

/// Returns the first MAC-looking substring of the line, if any
pub fn find_mac(line: &str) -> Option<&str> {
    MAC_PATTERNS
        .iter()
        .find_map(|re| re.find(line))
        .map(|m| m.as_str())
}

/// Reads lines from `reader`, keeping those that contain a MAC address
///
/// Trailing `\r` is removed so Windows-saved dumps behave like Unix ones.
/// Bytes that are not valid UTF-8 are replaced rather than failing the read.
pub fn filter_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut kept = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let decoded = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = decoded {
            debug!(line = %decoded.trim_end(), "Replaced invalid UTF-8 in input line");
        }
        let line = decoded.trim_end_matches(['\n', '\r']);
        if contains_mac(line) {
            kept.push(line.to_string());
        } else {
            debug!(line, "Dropping line without MAC address");
        }
    }

    Ok(kept)
}

/// Opens `path` and returns its MAC-bearing lines
///
/// A missing file is reported as [`ArpError::InputMissing`].
#[instrument(skip_all, fields(path = %path.display()))]
pub fn read_filtered(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ArpError::InputMissing {
            path: path.to_path_buf(),
        },
        _ => ArpError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let kept = filter_lines(BufReader::new(file)).map_err(|source| ArpError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(kept = kept.len(), "Filtered input lines");
    Ok(kept)
}
