//! CSV output formatting for subnet summaries.

use crate::processing::SubnetSummary;
use std::net::Ipv4Addr;

use super::terminal::format_field;

/// Header line matching [`csv_row`].
pub fn csv_header() -> String {
    [
        format_field("cnt", 5),
        format_field("subnet_cidr", 20),
        format_field("network", 17),
        format_field("broadcast", 17),
        format_field("netmask", 17),
        format_field("wildcard", 17),
        format_field("first_host", 17),
        format_field("last_host", 17),
        format_field("hosts", 12),
    ]
    .join(",")
}

/// One CSV line for a summary; `j` is the row counter.
pub fn csv_row(j: usize, row: &SubnetSummary) -> String {
    format!(
        r#"{j},{subnet_cidr},{network},{broadcast},{netmask},{wildcard},{first_host},{last_host},{hosts}"#,
        j = format_field(j, 5),
        subnet_cidr = format_field(row.cidr, 20),
        network = format_field(row.network, 17),
        broadcast = format_field(row.broadcast, 17),
        netmask = format_field(row.netmask, 17),
        wildcard = format_field(row.wildcard, 17),
        first_host = format_field(host_or_none(row.first_host), 17),
        last_host = format_field(host_or_none(row.last_host), 17),
        hosts = format_field(row.hosts, 12),
    )
}

fn host_or_none(host: Option<Ipv4Addr>) -> String {
    host.map(|h| h.to_string())
        .unwrap_or_else(|| "None".to_string())
}

/// Print summaries as CSV to stdout.
pub fn print_csv(rows: &[SubnetSummary]) {
    log::info!("#Start print_csv() rows = {}", rows.len());

    println!("{}", csv_header());
    for (i, row) in rows.iter().enumerate() {
        println!("{}", csv_row(i + 1, row));
    }
}
