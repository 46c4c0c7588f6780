//! Tests for the encoding-detecting reader


use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::constants::ENCODING_PRIORITY;

/// Encoding priority list as configured by default
pub fn default_encodings() -> Vec<String> {
    ENCODING_PRIORITY.iter().map(|e| e.to_string()).collect()
}

/// Write raw bytes into a temporary CSV file and return its path
pub fn write_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(bytes).expect("write fixture");
    path
}
