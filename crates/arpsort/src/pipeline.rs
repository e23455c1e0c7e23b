//! One batch run: filter, parse, sort, report, export

use crate::config::Config;
use crate::error::Result;
use crate::filter::read_filtered;
use crate::oui::OuiDatabase;
use crate::persist::write_mac_map;
use crate::record::ArpRecord;
use crate::report::Reporter;
use crate::table::ArpTable;
use std::io::Write;
use tracing::{info, instrument, warn};

/// Counters describing a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that passed the MAC filter
    pub filtered_lines: usize,
    /// Of those, lines that did not have the expected columns
    pub malformed: usize,
    /// Records dropped because their IP was invalid
    pub skipped: usize,
    /// Distinct IPs reported and exported
    pub unique_ips: usize,
}

/// Parses filtered lines into a sorted table, logging degraded rows
pub fn build_table(lines: &[String]) -> (ArpTable, usize) {
    let mut malformed = 0;

    let records: Vec<ArpRecord> = lines
        .iter()
        .map(|line| {
            let parsed = ArpRecord::parse(line);
            if let Some(e) = parsed.malformed {
                warn!(error = %e, "Keeping partial ARP record");
                malformed += 1;
            }
            parsed.record
        })
        .collect();

    (ArpTable::from_records(records), malformed)
}

/// Runs the whole pipeline, writing reports to `out`
///
/// A missing input file ends the run before any report is written or the
/// output file is touched.
#[instrument(skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run<W: Write>(config: &Config, out: W) -> Result<RunSummary> {
    let lines = read_filtered(&config.input)?;
    let (table, malformed) = build_table(&lines);

    let oui = match &config.manuf {
        Some(path) => OuiDatabase::from_manuf_file(path)?,
        None => OuiDatabase::bundled(),
    };

    Reporter::new(out, &oui).write_all(&table, &config.watch)?;
    write_mac_map(&config.output, &table)?;

    let summary = RunSummary {
        filtered_lines: table.filtered_lines(),
        malformed,
        skipped: table.skipped(),
        unique_ips: table.unique_ips(),
    };
    info!(?summary, "Run complete");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArpError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_table_counts_malformed() {
        let lines = vec![
            "Internet  10.0.0.1   0   0000.0000.0001  ARPA   Vlan1".to_string(),
            "Internet  10.0.0.2   0000.0000.0002".to_string(),
            "Internet  bogus   0   0000.0000.0003  ARPA   Vlan1".to_string(),
        ];

        let (table, malformed) = build_table(&lines);
        assert_eq!(malformed, 1);
        assert_eq!(table.filtered_lines(), 3);
        assert_eq!(table.unique_ips(), 2);
        assert_eq!(table.skipped(), 1);
    }

    #[test]
    fn test_run_reports_partial_record_with_blank_vlan() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input: dir.path().join("arp.txt"),
            output: dir.path().join("Mac2IP.json"),
            ..Config::default()
        };
        std::fs::write(
            &config.input,
            "Internet  10.0.0.1   0   0000.0000.0001  ARPA   Vlan1\n\
             Internet  10.0.0.2   0000.0000.0002\n",
        )
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        let summary = run(&config, &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert_eq!(summary.malformed, 1);
        assert_eq!(summary.unique_ips, 2);
        let vlan_rows: Vec<&str> = report
            .lines()
            .skip_while(|l| !l.starts_with("Number of IP, MAC and VLAN"))
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(
            vlan_rows,
            vec!["10.0.0.1 0000.0000.0001  1", "10.0.0.2 0000.0000.0002  "]
        );
        assert!(report.contains("\n10.0.0.2 0000.0000.0002 Unknown\n"));
    }

    #[test]
    fn test_run_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input: dir.path().join("arp.txt"),
            output: dir.path().join("Mac2IP.json"),
            ..Config::default()
        };

        let mut out: Vec<u8> = Vec::new();
        let err = run(&config, &mut out).unwrap_err();

        assert!(matches!(err, ArpError::InputMissing { .. }));
        assert!(out.is_empty());
        assert!(!config.output.exists());
    }
}
