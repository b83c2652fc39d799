//! Archive content scanning for OS packaging debris.
//!
//! Inspects a ZIP archive's central-directory listing for filesystem
//! artifacts left behind by desktop operating systems (`__MACOSX/` trees,
//! `.DS_Store`, `Thumbs.db`, `._*` resource forks). Entry payloads are
//! never decompressed, so the scan cost is bounded by the entry count, not
//! the archive size.

use std::io::{Cursor, Read, Seek};

use once_cell::sync::Lazy;
use tracing::warn;

use crate::config::ScanRules;
use crate::error::Result;

static DEFAULT_RULES: Lazy<ScanRules> = Lazy::new(ScanRules::default);

/// Check an uploaded archive for OS artifacts using the built-in rules.
///
/// Returns `true` when the archive contains at least one suspect entry and
/// `false` when it is clean - or unreadable. Unreadable input fails open:
/// a corrupt or non-ZIP buffer is reported as clean (and logged), on the
/// reasoning that a malformed archive is rejected by the upload pipeline's
/// own format validation. Callers that want fail-closed semantics should use
/// [`scan_entries`] and treat `Err` as rejection.
pub async fn contains_os_artifacts(bytes: Vec<u8>) -> bool {
    let scanned =
        tokio::task::spawn_blocking(move || scan_entries(Cursor::new(bytes), &DEFAULT_RULES))
            .await;

    match scanned {
        Ok(Ok(verdict)) => verdict,
        Ok(Err(err)) => {
            warn!(error = %err, "archive scan failed, treating archive as clean");
            false
        }
        Err(err) => {
            warn!(error = %err, "archive scan task aborted, treating archive as clean");
            false
        }
    }
}

/// Scan a ZIP archive's entry catalog against `rules`.
///
/// Returns `Ok(true)` as soon as one suspect entry is found, `Ok(false)`
/// after exhausting the catalog, and `Err` when the archive cannot be
/// opened. The reader is held only for the duration of this call; it is
/// released on every exit path, including open failure.
pub fn scan_entries<R: Read + Seek>(reader: R, rules: &ScanRules) -> Result<bool> {
    let archive = zip::ZipArchive::new(reader)?;
    let suspect = archive.file_names().any(|name| is_suspect_entry(name, rules));
    Ok(suspect)
}

/// Classify a single entry path.
///
/// The path is split into non-empty segments; the last segment is the
/// basename. An entry is suspect if any segment is a junk folder, or the
/// basename is a junk file or carries a junk prefix.
fn is_suspect_entry(name: &str, rules: &ScanRules) -> bool {
    // Some archivers write backslash separators; treat both forms alike.
    let segments: Vec<&str> = name
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect();

    let Some(basename) = segments.last() else {
        return false;
    };

    segments.iter().any(|segment| rules.is_junk_folder(segment))
        || rules.is_junk_file(basename)
        || rules.has_junk_prefix(basename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sources_are_clean() {
        let rules = ScanRules::default();
        assert!(!is_suspect_entry("main.py", &rules));
        assert!(!is_suspect_entry("data/input.txt", &rules));
        assert!(!is_suspect_entry("src/solution/solver.rs", &rules));
    }

    #[test]
    fn test_junk_folder_anywhere_in_path() {
        let rules = ScanRules::default();
        assert!(is_suspect_entry("__MACOSX/._main.py", &rules));
        assert!(is_suspect_entry("project/__MACOSX/sub/file.txt", &rules));
        assert!(is_suspect_entry("$RECYCLE.BIN/S-1-5-21/file", &rules));
    }

    #[test]
    fn test_junk_file_basename() {
        let rules = ScanRules::default();
        assert!(is_suspect_entry("folder/.DS_Store", &rules));
        assert!(is_suspect_entry(".DS_Store", &rules));
        assert!(is_suspect_entry("images/Thumbs.db", &rules));
    }

    #[test]
    fn test_junk_prefix_basename() {
        let rules = ScanRules::default();
        assert!(is_suspect_entry("._solution.c", &rules));
        assert!(is_suspect_entry("nested/dir/._notes.md", &rules));
    }

    #[test]
    fn test_junk_names_as_infix_are_clean() {
        let rules = ScanRules::default();
        // Matching is per whole segment, not substring.
        assert!(!is_suspect_entry("not__MACOSX__really/file.txt", &rules));
        assert!(!is_suspect_entry("docs/about.DS_Store.md/notes", &rules));
    }

    #[test]
    fn test_backslash_separated_paths() {
        let rules = ScanRules::default();
        assert!(is_suspect_entry("project\\__MACOSX\\file", &rules));
        assert!(is_suspect_entry("dir\\Thumbs.db", &rules));
    }

    #[test]
    fn test_empty_segments_ignored() {
        let rules = ScanRules::default();
        assert!(!is_suspect_entry("a//b.txt", &rules));
        assert!(!is_suspect_entry("", &rules));
        assert!(is_suspect_entry("a//__MACOSX//b", &rules));
    }

    #[test]
    fn test_directory_entries_match_on_trailing_separator() {
        let rules = ScanRules::default();
        // ZIP directory entries carry a trailing slash.
        assert!(is_suspect_entry("__MACOSX/", &rules));
    }

    #[test]
    fn test_custom_rules() {
        let rules = ScanRules::from_toml_str(r#"junk_prefixes = ["~$"]"#).unwrap();
        assert!(is_suspect_entry("report/~$thesis.docx", &rules));
        assert!(!is_suspect_entry("report/thesis.docx", &rules));
    }
}
