//! File I/O utilities with atomic overwrites
//!
//! Full-file rewrites (the balance record, migration) go through a temp file
//! plus rename so a failed write never leaves a half-written file behind.
//! Appends do not need this; they go straight to the ledger file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::LedgerError;

/// Overwrite a text file atomically (write to temp, then rename)
pub fn write_text_atomic(path: &Path, contents: &str) -> Result<(), LedgerError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up the temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("balance.txt");

        write_text_atomic(&path, "100.00,95.50\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "100.00,95.50\n");
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("balance.txt");

        write_text_atomic(&path, "first\n").unwrap();
        write_text_atomic(&path, "second\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("balance.txt");

        write_text_atomic(&path, "0.00,0.00\n").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("balance.txt.tmp").exists());
    }
}
