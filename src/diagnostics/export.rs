// SPDX-License-Identifier: MPL-2.0
//! Writing diagnostic reports to disk.

use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Generates a default filename for diagnostic reports.
///
/// Format: `iced_toast_diagnostics_YYYYMMDD_HHMMSS.json`, in local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("iced_toast_diagnostics_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Writes content to a file atomically.
///
/// Content goes to a sibling `.tmp` file first and is then renamed over the
/// target, so a failed write never leaves a truncated report behind.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

/// Directory reports are saved to: the user's Documents folder, else the
/// current directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_filename_has_prefix_and_extension() {
        let name = generate_default_filename();
        assert!(name.starts_with("iced_toast_diagnostics_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn write_atomic_replaces_content_and_leaves_no_temp_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("report.json");

        write_atomic(&path, "{\"a\":1}").expect("first write");
        write_atomic(&path, "{\"a\":2}").expect("second write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "{\"a\":2}");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn write_atomic_fails_for_missing_directory() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("report.json");
        assert!(write_atomic(&path, "{}").is_err());
    }
}
