//! Cursor persistence
//!
//! This module provides the CursorStore for loading and saving the sync
//! cursor to its file.

use crate::core::state::cursor::Cursor;
use crate::domain::errors::SyncError;
use crate::domain::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed cursor store
///
/// A fresh store (no cursor file yet) must not fail: the first `load`
/// creates the file with the initial `0,0` cursor. Saves are atomic
/// (write to a temp file, then rename) so a crash mid-write never leaves
/// a truncated cursor behind.
pub struct CursorStore {
    path: PathBuf,
}

impl CursorStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted cursor
    ///
    /// If the cursor file does not exist it is created with the initial
    /// cursor, which is then returned. Any other read or parse failure is
    /// fatal for the run.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::State` if the file exists but cannot be read
    /// or does not parse.
    pub fn load(&self) -> Result<Cursor> {
        if !self.path.exists() {
            tracing::warn!(
                path = %self.path.display(),
                "No cursor file found, creating initial cursor"
            );
            let cursor = Cursor::initial();
            self.save(&cursor)?;
            return Ok(cursor);
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            SyncError::State(format!(
                "Failed to read cursor file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let cursor: Cursor = contents.parse()?;

        tracing::debug!(
            path = %self.path.display(),
            last_order_id = cursor.last_order_id,
            last_document_seq = cursor.last_document_seq,
            "Loaded cursor"
        );

        Ok(cursor)
    }

    /// Atomically overwrite the persisted cursor
    ///
    /// Must only be called after the current batch's output files are
    /// durably written; the cursor write is the last action of a
    /// successful run.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::State` if the file cannot be written or
    /// renamed into place.
    pub fn save(&self, cursor: &Cursor) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    SyncError::State(format!(
                        "Failed to create cursor directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, cursor.to_string()).map_err(|e| {
            SyncError::State(format!(
                "Failed to write cursor file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            SyncError::State(format!(
                "Failed to persist cursor file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::info!(
            path = %self.path.display(),
            last_order_id = cursor.last_order_id,
            last_document_seq = cursor.last_document_seq,
            "Saved cursor"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_initial_cursor_on_first_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lastImport.csv");
        let store = CursorStore::new(&path);

        let cursor = store.load().unwrap();
        assert_eq!(cursor, Cursor::initial());

        // The file now exists and holds the initial record
        assert_eq!(fs::read_to_string(&path).unwrap(), "0,0");
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = CursorStore::new(dir.path().join("cursor.csv"));

        store.save(&Cursor::new(91234, 3)).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, Cursor::new(91234, 3));
    }

    #[test]
    fn test_save_overwrites_previous_cursor() {
        let dir = TempDir::new().unwrap();
        let store = CursorStore::new(dir.path().join("cursor.csv"));

        store.save(&Cursor::new(1, 1)).unwrap();
        store.save(&Cursor::new(2, 2)).unwrap();

        assert_eq!(store.load().unwrap(), Cursor::new(2, 2));
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cursor.csv");
        fs::write(&path, "not-a-cursor").unwrap();

        let store = CursorStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_save_creates_missing_parent_dir() {
        let dir = TempDir::new().unwrap();
        let store = CursorStore::new(dir.path().join("state").join("cursor.csv"));

        store.save(&Cursor::initial()).unwrap();
        assert_eq!(store.load().unwrap(), Cursor::initial());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cursor.csv");
        let store = CursorStore::new(&path);

        store.save(&Cursor::new(5, 1)).unwrap();
        assert!(!path.with_extension("tmp").exists());
    }
}
