//! Sorted ARP table aggregates

use crate::error::ArpError;
use crate::record::ArpRecord;
use arp_types::{ip_to_key, IpKey, MacAddress};
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// Records of one dump, keyed for numeric IP ordering
#[derive(Debug, Default, Clone)]
pub struct ArpTable {
    /// One entry per accepted record, duplicates kept, ascending by key
    ips: Vec<(IpKey, String)>,
    /// Last record seen for each IP, with its input position
    by_ip: BTreeMap<IpKey, (usize, ArpRecord)>,
    filtered_lines: usize,
    skipped: usize,
}

impl ArpTable {
    /// Builds the table from records in input order
    ///
    /// Records whose IP column is not a valid dotted quad are skipped with
    /// a warning instead of aborting the run.
    #[instrument(skip_all)]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ArpRecord>,
    {
        let mut table = ArpTable::default();

        for (position, record) in records.into_iter().enumerate() {
            table.filtered_lines += 1;

            let key = match ip_to_key(&record.ip) {
                Ok(key) => key,
                Err(e) => {
                    let error = ArpError::InvalidAddress(e);
                    warn!(mac = %record.mac, %error, "Skipping ARP record");
                    table.skipped += 1;
                    continue;
                }
            };

            table.ips.push((key, record.ip.clone()));
            table.by_ip.insert(key, (position, record));
        }

        // Stable, so duplicate IPs keep their input order
        table.ips.sort_by_key(|(key, _)| *key);

        info!(
            filtered = table.filtered_lines,
            accepted = table.ips.len(),
            unique = table.by_ip.len(),
            skipped = table.skipped,
            "Built ARP table"
        );

        table
    }

    /// IP literals ascending by numeric value, duplicates included
    pub fn sorted_ips(&self) -> impl Iterator<Item = &str> + '_ {
        self.ips.iter().map(|(_, ip)| ip.as_str())
    }

    /// Unique IPs ascending, each with its last-seen record
    pub fn entries(&self) -> impl Iterator<Item = (IpKey, &ArpRecord)> + '_ {
        self.by_ip.iter().map(|(key, (_, record))| (*key, record))
    }

    /// Record for an IP, if present
    pub fn get(&self, key: IpKey) -> Option<&ArpRecord> {
        self.by_ip.get(&key).map(|(_, record)| record)
    }

    /// Inverse of [`entries`](Self::entries), ascending by IP
    ///
    /// Keys are the MAC text as extracted. When several IPs carry the same
    /// MAC the one from the later input line wins.
    pub fn mac_to_ip(&self) -> Vec<(&str, IpKey)> {
        let mut in_input_order: Vec<(usize, &str, IpKey)> = self
            .by_ip
            .iter()
            .map(|(key, (position, record))| (*position, record.mac.as_str(), *key))
            .collect();
        in_input_order.sort_by_key(|(position, _, _)| *position);

        let mut inverse: BTreeMap<&str, IpKey> = BTreeMap::new();
        for (_, mac, key) in in_input_order {
            inverse.insert(mac, key);
        }

        let mut pairs: Vec<(&str, IpKey)> = inverse.into_iter().collect();
        pairs.sort_by_key(|(mac, key)| (*key, *mac));
        pairs
    }

    /// Looks up the IP for a MAC, comparing addresses rather than spelling
    pub fn ip_for_mac(&self, mac: &MacAddress) -> Option<(&str, IpKey)> {
        self.mac_to_ip()
            .into_iter()
            .find(|(raw, _)| raw.parse::<MacAddress>().ok().as_ref() == Some(mac))
    }

    /// Number of lines that passed the MAC filter
    pub fn filtered_lines(&self) -> usize {
        self.filtered_lines
    }

    /// Number of records kept in the IP list
    pub fn accepted(&self) -> usize {
        self.ips.len()
    }

    /// Number of distinct IPs
    pub fn unique_ips(&self) -> usize {
        self.by_ip.len()
    }

    /// Number of records dropped for an invalid IP
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }
}
