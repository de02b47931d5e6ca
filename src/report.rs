//! Console rendering of clustering results.
//!
//! The grouped report shows one block per cluster in creation order; the
//! detail view expands a single cluster addressed by its 0-based position
//! in the result.

use crate::error::{ClusterError, Result};
use crate::types::Cluster;
use colored::Colorize;
use std::fmt::Write;

/// Renders the grouped report for a whole clustering result.
///
/// With `verbose` set, each member also lists the URLs it shares with
/// the cluster's principal member.
#[must_use]
pub fn render_report(clusters: &[Cluster], verbose: bool) -> String {
    let mut out = String::new();

    if clusters.is_empty() {
        let _ = writeln!(out, "{}", "No clusters (empty keyword list).".dimmed());
        return out;
    }

    let _ = writeln!(
        out,
        "{} {}",
        format!("{}", clusters.len()).bold(),
        if clusters.len() == 1 {
            "cluster"
        } else {
            "clusters"
        }
    );

    for (idx, cluster) in clusters.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{} {}  {}",
            format!("[{idx}]").cyan(),
            cluster.name.bold(),
            format!("total volume {}", cluster.total_volume).dimmed()
        );
        for member in &cluster.members {
            let _ = writeln!(
                out,
                "    {:<40} vol {:<8} {}",
                member.keyword,
                member.volume,
                format!("{:.0}% similar", member.similarity * 100.0).green()
            );
            if verbose && !member.similar_urls.is_empty() {
                for url in &member.similar_urls {
                    let _ = writeln!(out, "        {}", url.dimmed());
                }
            }
        }
    }

    out
}

/// Renders the detail view for the cluster at `index`.
///
/// # Errors
///
/// Returns `ClusterError::ClusterIndexOutOfRange` when `index` does not
/// address a cluster in this result.
pub fn render_detail(clusters: &[Cluster], index: usize) -> Result<String> {
    let cluster = clusters
        .get(index)
        .ok_or(ClusterError::ClusterIndexOutOfRange {
            index,
            len: clusters.len(),
        })?;

    let mut out = String::new();
    let _ = writeln!(out, "{}", cluster.name.bold());
    let _ = writeln!(out, "total volume: {}", cluster.total_volume);
    let _ = writeln!(out, "members: {}", cluster.members.len());

    for member in &cluster.members {
        let _ = writeln!(
            out,
            "\n  {}  vol {}  {}",
            member.keyword.bold(),
            member.volume,
            format!("{:.0}% similar", member.similarity * 100.0).green()
        );
        if member.similar_urls.is_empty() {
            let _ = writeln!(out, "    {}", "no URLs shared with principal".dimmed());
        } else {
            for url in &member.similar_urls {
                let _ = writeln!(out, "    {url}");
            }
        }
    }

    Ok(out)
}
