//! CSV file output
//!
//! Writes the archive and import files for a run. Both files of a run
//! share one minute-resolution timestamp stamp so they pair up on disk.

use crate::config::OutputConfig;
use crate::domain::errors::SyncError;
use crate::domain::result::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes batch output files into the configured directories
pub struct OutputWriter {
    config: OutputConfig,
}

impl OutputWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// The `YYYYMMDD_HHmm` stamp embedded in both file names of a run
    pub fn file_stamp(now: DateTime<Utc>) -> String {
        now.format("%Y%m%d_%H%M").to_string()
    }

    /// Write the archive file for a run
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Output` if the directory cannot be created or
    /// the file cannot be written.
    pub fn write_archive<T: Serialize>(&self, rows: &[T], stamp: &str) -> Result<PathBuf> {
        self.write_file(
            &self.config.archive_dir,
            &self.config.archive_prefix,
            stamp,
            rows,
        )
    }

    /// Write the OMS import file for a run
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Output` if the directory cannot be created or
    /// the file cannot be written.
    pub fn write_import<T: Serialize>(&self, rows: &[T], stamp: &str) -> Result<PathBuf> {
        self.write_file(
            &self.config.import_dir,
            &self.config.import_prefix,
            stamp,
            rows,
        )
    }

    fn write_file<T: Serialize>(
        &self,
        dir: &str,
        prefix: &str,
        stamp: &str,
        rows: &[T],
    ) -> Result<PathBuf> {
        let dir = Path::new(dir);
        fs::create_dir_all(dir).map_err(|e| {
            SyncError::Output(format!(
                "Failed to create output directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let path = dir.join(format!("{prefix}{stamp}.csv"));
        let mut writer = csv::Writer::from_path(&path).map_err(|e| {
            SyncError::Output(format!("Failed to create {}: {}", path.display(), e))
        })?;

        for row in rows {
            writer.serialize(row).map_err(|e| {
                SyncError::Output(format!("Failed to write {}: {}", path.display(), e))
            })?;
        }

        writer.flush().map_err(|e| {
            SyncError::Output(format!("Failed to flush {}: {}", path.display(), e))
        })?;

        tracing::info!(path = %path.display(), rows = rows.len(), "Wrote output file");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Serialize)]
    struct Row {
        a: u32,
        b: String,
    }

    fn config(dir: &TempDir) -> OutputConfig {
        OutputConfig {
            archive_dir: dir.path().join("Incoming").to_string_lossy().into_owned(),
            import_dir: dir.path().join("Import").to_string_lossy().into_owned(),
            archive_prefix: "ShopifyOrders_".to_string(),
            import_prefix: "OmsImport_".to_string(),
        }
    }

    #[test]
    fn test_file_stamp_format() {
        let now: DateTime<Utc> = "2016-09-09T14:05:00Z".parse().unwrap();
        assert_eq!(OutputWriter::file_stamp(now), "20160909_1405");
    }

    #[test]
    fn test_write_archive_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(config(&dir));

        let rows = vec![Row {
            a: 1,
            b: "x".to_string(),
        }];
        let path = writer.write_archive(&rows, "20160909_1405").unwrap();

        assert!(path.ends_with("ShopifyOrders_20160909_1405.csv"));
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "a,b\n1,x\n");
    }

    #[test]
    fn test_archive_and_import_land_in_their_own_dirs() {
        let dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(config(&dir));
        let rows = vec![Row {
            a: 1,
            b: "x".to_string(),
        }];

        let archive = writer.write_archive(&rows, "20160909_1405").unwrap();
        let import = writer.write_import(&rows, "20160909_1405").unwrap();

        assert!(archive.starts_with(dir.path().join("Incoming")));
        assert!(import.starts_with(dir.path().join("Import")));
        assert!(import.ends_with("OmsImport_20160909_1405.csv"));
    }
}
