//! Human-readable reports over a sorted ARP table
//!
//! Each section starts with a count header and lists one entry per line in
//! ascending numeric IP order.

use crate::oui::OuiDatabase;
use crate::table::ArpTable;
use arp_types::MacAddress;
use std::io::{self, Write};
use tracing::debug;

/// Writes report sections for one table
pub struct Reporter<'a, W: Write> {
    out: W,
    oui: &'a OuiDatabase,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(out: W, oui: &'a OuiDatabase) -> Self {
        Self { out, oui }
    }

    /// Writes every section in order, then flushes
    pub fn write_all(&mut self, table: &ArpTable, watch: &[MacAddress]) -> io::Result<()> {
        self.write_ip_list(table)?;
        writeln!(self.out)?;
        self.write_ip_mac(table)?;
        writeln!(self.out)?;
        self.write_ip_mac_vlan(table)?;
        writeln!(self.out)?;
        if self.write_watch_notes(table, watch)? > 0 {
            writeln!(self.out)?;
        }
        self.write_manufacturers(table)?;
        self.out.flush()
    }

    /// Every accepted IP, duplicates included
    pub fn write_ip_list(&mut self, table: &ArpTable) -> io::Result<()> {
        writeln!(self.out, "Number of IP Addresses: {}", table.accepted())?;
        for ip in table.sorted_ips() {
            writeln!(self.out, "{}", ip)?;
        }
        Ok(())
    }

    /// One `<ip> <mac>` line per unique IP
    pub fn write_ip_mac(&mut self, table: &ArpTable) -> io::Result<()> {
        writeln!(self.out, "Number of IP and MAC Addresses: {}", table.unique_ips())?;
        for (key, record) in table.entries() {
            writeln!(self.out, "{} {}", key, record.mac)?;
        }
        Ok(())
    }

    /// One `<ip> <mac>  <vlan>` line per unique IP
    pub fn write_ip_mac_vlan(&mut self, table: &ArpTable) -> io::Result<()> {
        writeln!(self.out, "Number of IP, MAC and VLAN: {}", table.unique_ips())?;
        for (key, record) in table.entries() {
            writeln!(self.out, "{} {}", key, record.mac_and_vlan())?;
        }
        Ok(())
    }

    /// Calls out the IP of each watched MAC present in the table
    ///
    /// Returns how many notes were written.
    pub fn write_watch_notes(&mut self, table: &ArpTable, watch: &[MacAddress]) -> io::Result<usize> {
        let mut written = 0;
        for mac in watch {
            match table.ip_for_mac(mac) {
                Some((raw, key)) => {
                    writeln!(self.out, "The IP for MAC {} is {}", raw, key)?;
                    written += 1;
                }
                None => debug!(%mac, "Watched MAC not in ARP table"),
            }
        }
        Ok(written)
    }

    /// One `<ip> <mac> <manufacturer>` line per unique IP
    pub fn write_manufacturers(&mut self, table: &ArpTable) -> io::Result<()> {
        writeln!(
            self.out,
            "Number of IP, MAC and Manufacture: {}",
            table.unique_ips()
        )?;
        writeln!(self.out)?;
        for (key, record) in table.entries() {
            writeln!(
                self.out,
                "{} {} {}",
                key,
                record.mac,
                self.oui.manufacturer(&record.mac)
            )?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
