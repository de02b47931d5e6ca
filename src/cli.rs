//! Command-line surface.
//!
//! The binary consumes a JSON file of pre-fetched keyword records — the
//! materialized output of whatever upstream fetched volumes and ranking
//! URLs — so clustering runs without any network dependency.

use crate::config::Config;
use crate::engine::cluster_keywords;
use crate::error::ClusterError;
use crate::export::export_clusters;
use crate::input::{validate_records, validate_threshold};
use crate::report::{render_detail, render_report};
use crate::store::ResultStore;
use crate::types::KeywordRecord;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "serpcluster", version, about = "Cluster keywords by ranking-URL overlap")]
pub struct Cli {
    /// JSON file containing an array of keyword records:
    /// {"keyword", "volume" (nullable), "urls": [...]}
    pub records: PathBuf,

    /// Merge threshold percentage (0-100); overrides serpcluster.toml
    #[arg(long, short)]
    pub threshold: Option<u32>,

    /// Write the two-column cluster export to this file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Show the detail view for one cluster (0-based index) instead of
    /// the grouped report
    #[arg(long, value_name = "INDEX")]
    pub detail: Option<usize>,

    /// List shared URLs under each member in the grouped report
    #[arg(long, short)]
    pub verbose: bool,
}

/// Loads records, runs the engine, and renders the requested output.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&std::env::current_dir()?)?;
    let threshold = match cli.threshold {
        Some(t) => validate_threshold(t)?,
        None => config.threshold,
    };

    let records = load_records(&cli.records)?;
    validate_records(&records)?;

    let clusters = cluster_keywords(&records, threshold);

    // One run, one job; the store still hands results around by id so a
    // longer-lived caller can keep several runs alive concurrently.
    let store = ResultStore::new();
    let job = store.insert(clusters);
    let result = store.get(job)?;

    match cli.detail {
        Some(index) => print!("{}", render_detail(&result, index)?),
        None => print!("{}", render_report(&result, cli.verbose)),
    }

    if let Some(path) = &cli.export {
        let table = export_clusters(&result, config.delimiter);
        fs::write(path, table)
            .with_context(|| format!("writing export to {}", path.display()))?;
        eprintln!("{} {}", "exported".green(), path.display());
    }

    Ok(())
}

fn load_records(path: &std::path::Path) -> Result<Vec<KeywordRecord>> {
    let raw = fs::read_to_string(path).map_err(|source| ClusterError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let records: Vec<KeywordRecord> = serde_json::from_str(&raw).map_err(ClusterError::Json)?;
    Ok(records)
}
