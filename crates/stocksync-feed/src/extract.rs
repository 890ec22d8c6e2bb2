//! Spreadsheet extraction from the report archive.

use std::fs::File;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::FeedError;

/// File extensions recognized as spreadsheets.
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "ods"];

/// A spreadsheet written to disk; the file is removed on drop.
#[derive(Debug)]
pub struct ExtractedFile {
    path: PathBuf,
}

impl ExtractedFile {
    /// Returns the path of the extracted file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ExtractedFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "removed extracted spreadsheet"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to remove extracted spreadsheet");
            }
        }
    }
}

/// Writes the first spreadsheet found in a zip archive into `dir`.
///
/// Directory structure inside the archive is flattened. Entries whose path
/// would escape `dir` are skipped.
///
/// # Errors
///
/// Returns an error if the archive is empty or unreadable, holds no
/// spreadsheet, or the file cannot be written.
pub fn extract_spreadsheet(archive: &[u8], dir: &Path) -> Result<ExtractedFile, FeedError> {
    if archive.is_empty() {
        return Err(FeedError::EmptyArchive);
    }

    let mut archive = ZipArchive::new(Cursor::new(archive))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }

        let Some(name) = entry.enclosed_name().map(|p| p.to_path_buf()) else {
            tracing::warn!(entry = entry.name(), "skipping entry with unsafe path");
            continue;
        };
        if !is_spreadsheet(&name) {
            continue;
        }
        let Some(file_name) = name.file_name() else {
            continue;
        };

        let path = dir.join(file_name);
        let mut file = File::create(&path)?;
        // Guard first so a failed copy still cleans up.
        let extracted = ExtractedFile { path };
        let bytes = io::copy(&mut entry, &mut file)?;
        tracing::debug!(path = %extracted.path.display(), bytes, "extracted spreadsheet");
        return Ok(extracted);
    }

    Err(FeedError::NoSpreadsheet)
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SPREADSHEET_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::zip_archive as build_zip;

    #[test]
    fn test_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_spreadsheet(&[], dir.path());
        assert!(matches!(result, Err(FeedError::EmptyArchive)));
    }

    #[test]
    fn test_not_a_zip() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_spreadsheet(b"definitely not a zip", dir.path());
        assert!(matches!(result, Err(FeedError::Archive(_))));
    }

    #[test]
    fn test_no_spreadsheet() {
        let dir = tempfile::tempdir().unwrap();
        let archive = build_zip(&[("readme.txt", b"hello")]);
        let result = extract_spreadsheet(&archive, dir.path());
        assert!(matches!(result, Err(FeedError::NoSpreadsheet)));
    }

    #[test]
    fn test_extracts_and_removes_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let archive = build_zip(&[("readme.txt", b"hello"), ("nested/ostatki.xls", b"sheet")]);

        let extracted = extract_spreadsheet(&archive, dir.path()).unwrap();
        let path = extracted.path().to_path_buf();

        assert_eq!(path, dir.path().join("ostatki.xls"));
        assert_eq!(std::fs::read(&path).unwrap(), b"sheet");

        drop(extracted);
        assert!(!path.exists());
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(is_spreadsheet(Path::new("OSTATKI.XLS")));
        assert!(is_spreadsheet(Path::new("report.xlsx")));
        assert!(!is_spreadsheet(Path::new("report.csv")));
        assert!(!is_spreadsheet(Path::new("xls")));
    }
}
