//! Tabular export of clustering results.
//!
//! Two columns per cluster row (name, total volume) under a fixed
//! header, comma-delimited. Fields containing the delimiter, a quote,
//! or a newline are quoted RFC-4180 style; keywords routinely contain
//! commas since the raw input is comma-separated to begin with.

use crate::types::Cluster;

pub const EXPORT_HEADER: [&str; 2] = ["Cluster", "Total Volume"];

/// Renders the delimited export for a clustering result.
#[must_use]
pub fn export_clusters(clusters: &[Cluster], delimiter: char) -> String {
    let mut out = String::new();
    write_row(&mut out, &EXPORT_HEADER.map(String::from), delimiter);
    for cluster in clusters {
        write_row(
            &mut out,
            &[cluster.name.clone(), cluster.total_volume.to_string()],
            delimiter,
        );
    }
    out
}

fn write_row(out: &mut String, fields: &[String; 2], delimiter: char) {
    out.push_str(&quote_field(&fields[0], delimiter));
    out.push(delimiter);
    out.push_str(&quote_field(&fields[1], delimiter));
    out.push_str("\r\n");
}

fn quote_field(field: &str, delimiter: char) -> String {
    let needs_quoting = field.contains(delimiter)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');
    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
