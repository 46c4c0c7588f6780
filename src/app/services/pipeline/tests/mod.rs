//! Shared fixtures for the pipeline tests


use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::config::PipelineConfig;

pub const BANK_HEADER: &str = "日付,出金金額,入金金額,摘要,残高,メモ,ラベル";
pub const CARD_HEADER: &str = "利用日,利用店名,利用金額,分割回数合計,分割回数,分割支払金額,メモ";

/// A workspace with separate input directories per domain and an output
/// directory, torn down with the returned guard
pub struct Workspace {
    pub dir: TempDir,
    pub config: PipelineConfig,
}

pub fn workspace() -> Workspace {
    let dir = TempDir::new().unwrap();
    let bank_dir = dir.path().join("bank");
    let card_dir = dir.path().join("card");
    std::fs::create_dir_all(&bank_dir).unwrap();
    std::fs::create_dir_all(&card_dir).unwrap();

    let config = PipelineConfig::default()
        .with_bank_input_dir(&bank_dir)
        .with_card_input_dir(&card_dir)
        .with_output_dir(dir.path().join("processed"))
        .with_report_dir(dir.path().join("reports"))
        .with_processing_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

    Workspace { dir, config }
}

pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> PathBuf {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
