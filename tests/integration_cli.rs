// tests/integration_cli.rs - file-driven end-to-end runs
use serpcluster_core::cli::{run, Cli};
use serpcluster_core::engine::cluster_keywords;
use serpcluster_core::input::validate_records;
use serpcluster_core::report::render_report;
use serpcluster_core::types::KeywordRecord;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const RECORDS_JSON: &str = r#"[
  {"keyword": "seo tools", "volume": 880, "urls": ["https://a.example/1", "https://a.example/2"]},
  {"keyword": "best seo tools", "volume": 320, "urls": ["https://a.example/1", "https://a.example/2"]},
  {"keyword": "backlink checker", "volume": null, "urls": ["https://b.example/1"]}
]"#;

fn write_records(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("records.json");
    fs::write(&path, RECORDS_JSON).unwrap();
    path
}

#[test]
fn records_file_round_trips_through_the_pipeline() {
    let records: Vec<KeywordRecord> = serde_json::from_str(RECORDS_JSON).unwrap();
    validate_records(&records).unwrap();
    let clusters = cluster_keywords(&records, 50);

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].name, "seo tools");
    assert_eq!(clusters[0].members.len(), 2);
    assert_eq!(clusters[0].total_volume, 1200);
    // Null volume normalized to zero.
    assert_eq!(clusters[1].total_volume, 0);

    let report = render_report(&clusters, false);
    assert!(report.contains("seo tools"));
    assert!(report.contains("backlink checker"));
}

#[test]
fn run_writes_the_export_file() {
    let dir = TempDir::new().unwrap();
    let records = write_records(&dir);
    let export = dir.path().join("clusters.csv");

    let cli = Cli {
        records,
        threshold: Some(50),
        export: Some(export.clone()),
        detail: None,
        verbose: false,
    };
    run(&cli).unwrap();

    let table = fs::read_to_string(export).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "Cluster,Total Volume");
    assert_eq!(lines[1], "seo tools,1200");
    assert_eq!(lines[2], "backlink checker,0");
}

#[test]
fn run_rejects_out_of_range_threshold() {
    let dir = TempDir::new().unwrap();
    let records = write_records(&dir);
    let cli = Cli {
        records,
        threshold: Some(120),
        export: None,
        detail: None,
        verbose: false,
    };
    assert!(run(&cli).is_err());
}

#[test]
fn run_rejects_detail_index_out_of_range() {
    let dir = TempDir::new().unwrap();
    let records = write_records(&dir);
    let cli = Cli {
        records,
        threshold: Some(50),
        export: None,
        detail: Some(9),
        verbose: false,
    };
    assert!(run(&cli).is_err());
}

#[test]
fn run_rejects_malformed_records_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, "{not json").unwrap();
    let cli = Cli {
        records: path,
        threshold: None,
        export: None,
        detail: None,
        verbose: false,
    };
    assert!(run(&cli).is_err());
}
