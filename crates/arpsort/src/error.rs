//! Error types for arpsort

use arp_types::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while processing an ARP table dump
#[derive(Debug, Error)]
pub enum ArpError {
    /// Input file does not exist; the run stops before any report is written
    #[error("{} does not exist", .path.display())]
    InputMissing { path: PathBuf },

    /// Input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Line passed the MAC filter but does not have the expected columns
    #[error("Malformed ARP record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },

    /// IP column is not a dotted-quad IPv4 literal
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] ParseError),

    /// Output file could not be created or written
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Manufacturer database file could not be loaded
    #[error("Failed to load OUI database {}: {source}", .path.display())]
    OuiDatabase {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a report to the output stream failed
    #[error("Report output error: {0}")]
    Report(#[from] io::Error),
}

/// Result type alias for arpsort operations
pub type Result<T> = std::result::Result<T, ArpError>;
