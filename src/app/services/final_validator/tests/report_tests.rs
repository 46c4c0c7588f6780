//! Tests for report assembly, persistence and the import gate

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::app::services::final_validator::{ProcessedFiles, ReportStatus, ValidationReport};

fn timestamp(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn files() -> ProcessedFiles {
    ProcessedFiles {
        bank: vec!["processed_bank_2024.csv".to_string()],
        card: vec!["processed_card_2024.csv".to_string()],
    }
}

#[test]
fn test_clean_run_reports_ok() {
    let report = ValidationReport::new(vec![], vec![], vec![], vec![], files());
    assert_eq!(report.status, ReportStatus::Ok);
    assert_eq!(report.summary, "All validation checks passed");
    assert_eq!(report.total_findings(), 0);
    assert!(report.import_allowed());
}

#[test]
fn test_any_finding_reports_error() {
    let report = ValidationReport::new(
        vec![],
        vec!["bank data contains a large deposit: 2024-02-01 - 2500000 - 賞与".to_string()],
        vec![],
        vec![],
        files(),
    );
    assert_eq!(report.status, ReportStatus::Error);
    assert_eq!(report.summary, "Validation detected 1 finding(s)");
    assert!(!report.import_allowed());
}

#[test]
fn test_date_findings_alone_allow_import() {
    let report = ValidationReport::new(
        vec!["card data contains a future-dated transaction: 2025-06-01 - 店".to_string()],
        vec![],
        vec![],
        vec![],
        files(),
    );
    assert_eq!(report.status, ReportStatus::Error);
    assert!(report.import_allowed());
}

#[test]
fn test_balance_finding_blocks_import() {
    let report = ValidationReport::new(
        vec![],
        vec![],
        vec![],
        vec!["bank balance discontinuity on 2024-01-30".to_string()],
        files(),
    );
    assert!(!report.import_allowed());
}

#[test]
fn test_report_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let report = ValidationReport::new(
        vec!["card data contains a future-dated transaction: 2025-06-01 - 店".to_string()],
        vec![],
        vec![],
        vec![],
        files(),
    );

    let path = report.write_to(dir.path(), timestamp(14, 30, 22)).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "validation_results_20240601_143022.json"
    );

    let loaded = ValidationReport::load(&path).unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn test_status_serializes_as_upper_case() {
    let dir = TempDir::new().unwrap();
    let report = ValidationReport::new(vec![], vec![], vec![], vec![], files());
    let path = report.write_to(dir.path(), timestamp(9, 0, 0)).unwrap();

    let json = std::fs::read_to_string(path).unwrap();
    assert!(json.contains("\"status\": \"OK\""));
}

#[test]
fn test_load_latest_prefers_newest_report() {
    let dir = TempDir::new().unwrap();
    let older = ValidationReport::new(vec![], vec![], vec![], vec![], files());
    let newer = ValidationReport::new(
        vec![],
        vec![],
        vec!["bank data may contain mojibake: ス\u{FFFD}パー".to_string()],
        vec![],
        files(),
    );

    older.write_to(dir.path(), timestamp(9, 0, 0)).unwrap();
    let newer_path = newer.write_to(dir.path(), timestamp(10, 0, 0)).unwrap();

    let (path, loaded) = ValidationReport::load_latest(dir.path()).unwrap().unwrap();
    assert_eq!(path, newer_path);
    assert_eq!(loaded, newer);
}

#[test]
fn test_load_latest_on_empty_directory() {
    let dir = TempDir::new().unwrap();
    assert!(ValidationReport::load_latest(dir.path()).unwrap().is_none());
}
