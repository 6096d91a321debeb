//! Path management for Daybook
//!
//! The ledger treats one directory as its whole database: the balance record
//! and every day-ledger file live directly inside it. The directory is always
//! passed in explicitly (never read ambiently), so tests can point the stores
//! at an isolated temporary directory.
//!
//! ## Path Resolution Order
//!
//! 1. `DAYBOOK_DATA_DIR` environment variable (if set)
//! 2. The current working directory

use std::path::{Path, PathBuf};

/// Name of the balance record file inside the data directory
pub const BALANCE_FILE: &str = "balance.txt";

/// Manages all paths used by Daybook
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding the balance record and day-ledger files
    data_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// Path resolution:
    /// 1. `DAYBOOK_DATA_DIR` env var (explicit override)
    /// 2. The process working directory
    pub fn new() -> Self {
        let data_dir = match std::env::var("DAYBOOK_DATA_DIR") {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        Self { data_dir }
    }

    /// Create LedgerPaths with a custom data directory (useful for testing)
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the path to the balance record
    pub fn balance_file(&self) -> PathBuf {
        self.data_dir.join(BALANCE_FILE)
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_data_dir() {
        let paths = LedgerPaths::with_data_dir("/tmp/daybook-test");
        assert_eq!(paths.data_dir(), Path::new("/tmp/daybook-test"));
        assert_eq!(
            paths.balance_file(),
            Path::new("/tmp/daybook-test/balance.txt")
        );
    }
}
