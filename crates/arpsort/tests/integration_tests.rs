//! Integration tests for arpsort
//!
//! Runs the full pipeline against the `show ip arp vl 250` fixture.

use arpsort::{load_mac_map, run, ArpError, Config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/arp.txt");

/// Copies the fixture into a scratch directory and returns a config for it
fn setup(dir: &Path) -> Config {
    let input = dir.join("arp.txt");
    fs::write(&input, FIXTURE).expect("write fixture");
    Config {
        input,
        output: dir.join("Mac2IP.json"),
        ..Config::default()
    }
}

fn run_to_string(config: &Config) -> String {
    let mut out: Vec<u8> = Vec::new();
    run(config, &mut out).expect("run succeeds");
    String::from_utf8(out).expect("utf-8 report")
}

/// Rows of the section whose header starts with `header`
fn section<'a>(report: &'a str, header: &str) -> Vec<&'a str> {
    let mut lines = report.lines().skip_while(|l| !l.starts_with(header));
    assert!(lines.next().is_some(), "missing section {header}");
    lines
        .skip_while(|l| l.is_empty())
        .take_while(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_full_report() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());

    let report = run_to_string(&config);

    let expected = "\
Number of IP Addresses: 7
10.53.250.1
10.53.250.2
10.53.250.4
10.53.250.10
10.53.250.11
10.53.250.12
10.53.250.15

Number of IP and MAC Addresses: 7
10.53.250.1 0012.00f3.febf
10.53.250.2 1060.4b9d.db68
10.53.250.4 1060.4b9f.62f8
10.53.250.10 d8d4.3c2e.4b30
10.53.250.11 d8d4.3c2e.4b2f
10.53.250.12 d8d4.3c2e.4b32
10.53.250.15 d8d4.3c2e.4b31

Number of IP, MAC and VLAN: 7
10.53.250.1 0012.00f3.febf  250
10.53.250.2 1060.4b9d.db68  250
10.53.250.4 1060.4b9f.62f8  250
10.53.250.10 d8d4.3c2e.4b30  250
10.53.250.11 d8d4.3c2e.4b2f  250
10.53.250.12 d8d4.3c2e.4b32  250
10.53.250.15 d8d4.3c2e.4b31  250

Number of IP, MAC and Manufacture: 7

10.53.250.1 0012.00f3.febf Cisco
10.53.250.2 1060.4b9d.db68 HewlettP
10.53.250.4 1060.4b9f.62f8 HewlettP
10.53.250.10 d8d4.3c2e.4b30 Unknown
10.53.250.11 d8d4.3c2e.4b2f Unknown
10.53.250.12 d8d4.3c2e.4b32 Unknown
10.53.250.15 d8d4.3c2e.4b31 Unknown
";
    assert_eq!(report, expected);
}

#[test]
fn test_ip_mac_pairs() {
    let dir = TempDir::new().unwrap();
    let report = run_to_string(&setup(dir.path()));

    let pairs = section(&report, "Number of IP and MAC Addresses");
    assert!(pairs.contains(&"10.53.250.1 0012.00f3.febf"));
    assert!(pairs.contains(&"10.53.250.10 d8d4.3c2e.4b30"));
}

#[test]
fn test_json_export() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());
    run_to_string(&config);

    let map = load_mac_map(&config.output).unwrap();
    assert_eq!(map.len(), 7);
    assert_eq!(map[0], ("0012.00f3.febf".to_string(), "10.53.250.1".to_string()));
    assert!(map.contains(&("d8d4.3c2e.4b30".to_string(), "10.53.250.10".to_string())));
    assert!(map.iter().all(|(mac, _)| mac != "Incomplete"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.output).unwrap()).unwrap();
    let object = value.as_object().expect("flat JSON object");
    assert!(object.values().all(|v| v.is_string()));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());

    run_to_string(&config);
    let first = fs::read(&config.output).unwrap();
    run_to_string(&config);
    let second = fs::read(&config.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_lines_without_mac_are_excluded() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());
    let report = run_to_string(&config);

    assert!(!report.contains("10.53.250.9"));
    assert!(!fs::read_to_string(&config.output).unwrap().contains("10.53.250.9"));
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        input: dir.path().join("arp.txt"),
        output: dir.path().join("Mac2IP.json"),
        ..Config::default()
    };

    let mut out: Vec<u8> = Vec::new();
    let err = run(&config, &mut out).unwrap_err();

    match &err {
        ArpError::InputMissing { path } => assert_eq!(path, &config.input),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().ends_with("arp.txt does not exist"));
    assert!(out.is_empty());
    assert!(!config.output.exists());
}

#[test]
fn test_invalid_ip_row_is_skipped() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());
    let mut dump = FIXTURE.to_string();
    dump.push_str("Internet  10.53.250.300           0   aaaa.bbbb.cccc  ARPA   Vlan250\n");
    fs::write(&config.input, dump).unwrap();

    let mut out: Vec<u8> = Vec::new();
    let summary = run(&config, &mut out).unwrap();

    assert_eq!(summary.filtered_lines, 8);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.unique_ips, 7);
    assert_eq!(load_mac_map(&config.output).unwrap().len(), 7);
}

#[test]
fn test_watch_list_note() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        watch: vec!["d8:d4:3c:2e:4b:2f".parse().unwrap()],
        ..setup(dir.path())
    };

    let report = run_to_string(&config);
    assert!(report.contains("\nThe IP for MAC d8d4.3c2e.4b2f is 10.53.250.11\n"));
}

#[test]
fn test_custom_manuf_file() {
    let dir = TempDir::new().unwrap();
    let manuf: PathBuf = dir.path().join("manuf");
    fs::write(&manuf, "D8:D4:3C\tExample\tExample Networks\n").unwrap();
    let config = Config {
        manuf: Some(manuf),
        ..setup(dir.path())
    };

    let report = run_to_string(&config);
    let rows = section(&report, "Number of IP, MAC and Manufacture");
    assert!(rows.contains(&"10.53.250.10 d8d4.3c2e.4b30 Example"));
    assert!(rows.contains(&"10.53.250.1 0012.00f3.febf Unknown"));
}

#[test]
fn test_mixed_notations() {
    let dir = TempDir::new().unwrap();
    let config = setup(dir.path());
    fs::write(
        &config.input,
        "Internet  192.168.1.20   5   00-1b-21-aa-bb-cc  ARPA   Vlan10\n\
         Internet  192.168.1.3    5   00:50:56:01:02:03  ARPA   Vlan10\n\
         Internet  192.168.1.100  5   b827eb-112233      ARPA   Vlan10\n",
    )
    .unwrap();

    let report = run_to_string(&config);
    let rows = section(&report, "Number of IP, MAC and Manufacture");
    assert_eq!(
        rows,
        vec![
            "192.168.1.3 00:50:56:01:02:03 VMware",
            "192.168.1.20 00-1b-21-aa-bb-cc IntelCor",
            "192.168.1.100 b827eb-112233 Raspberr",
        ]
    );
}
