//! Integration tests for the archive scanner, against real ZIP fixtures
//! built in memory.

use std::io::{Cursor, Write};

use content_guard::{ScanRules, contains_os_artifacts, scan_entries};
use zip::write::SimpleFileOptions;

/// Build an in-memory ZIP containing the given entries. Names ending in
/// `/` become directory entries.
fn build_zip(entries: &[&str]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for name in entries {
        if let Some(dir) = name.strip_suffix('/') {
            writer.add_directory(dir, options).expect("add directory");
        } else {
            writer.start_file(*name, options).expect("start file");
            writer.write_all(b"payload").expect("write payload");
        }
    }

    writer.finish().expect("finish archive").into_inner()
}

#[tokio::test]
async fn test_clean_archive_is_not_flagged() {
    let bytes = build_zip(&["main.py", "data/input.txt"]);
    assert!(!contains_os_artifacts(bytes).await);
}

#[tokio::test]
async fn test_macosx_resource_fork_is_flagged() {
    let bytes = build_zip(&["main.py", "__MACOSX/._main.py"]);
    assert!(contains_os_artifacts(bytes).await);
}

#[tokio::test]
async fn test_ds_store_is_flagged() {
    let bytes = build_zip(&["folder/", "folder/.DS_Store", "folder/solution.cpp"]);
    assert!(contains_os_artifacts(bytes).await);
}

#[tokio::test]
async fn test_resource_fork_outside_macosx_is_flagged() {
    let bytes = build_zip(&["src/._solution.cpp"]);
    assert!(contains_os_artifacts(bytes).await);
}

#[tokio::test]
async fn test_zero_byte_buffer_fails_open() {
    assert!(!contains_os_artifacts(Vec::new()).await);
}

#[tokio::test]
async fn test_corrupt_buffer_fails_open() {
    assert!(!contains_os_artifacts(b"definitely not a zip archive".to_vec()).await);
}

#[tokio::test]
async fn test_truncated_archive_fails_open() {
    let mut bytes = build_zip(&["main.py"]);
    bytes.truncate(bytes.len() / 2);
    assert!(!contains_os_artifacts(bytes).await);
}

#[test]
fn test_sync_scan_surfaces_errors() {
    // The sync core reports unreadable input instead of failing open, so
    // callers can opt into fail-closed handling.
    let result = scan_entries(Cursor::new(vec![0u8; 16]), &ScanRules::default());
    assert!(result.is_err());
}

#[test]
fn test_sync_scan_short_circuits_on_first_hit() {
    let bytes = build_zip(&["__MACOSX/._a", "b.txt", "c.txt"]);
    let verdict = scan_entries(Cursor::new(bytes), &ScanRules::default()).expect("readable");
    assert!(verdict);
}

#[test]
fn test_custom_rules_extend_detection() {
    let rules = ScanRules::from_toml_str(
        r#"
        junk_files = [".DS_Store", "npm-debug.log"]
        "#,
    )
    .expect("valid rules toml");

    let bytes = build_zip(&["project/npm-debug.log"]);
    let verdict = scan_entries(Cursor::new(bytes), &rules).expect("readable");
    assert!(verdict);
}

#[test]
fn test_directory_only_junk_is_flagged() {
    let bytes = build_zip(&["__MACOSX/", "main.py"]);
    let verdict = scan_entries(Cursor::new(bytes), &ScanRules::default()).expect("readable");
    assert!(verdict);
}
