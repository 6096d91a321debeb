//! Day-ledger file store
//!
//! One text file per calendar date, named `expenses_<YYYY-MM-DD>.txt`, one
//! entry per line. Files are append-only: this store creates them and grows
//! them but never rewrites or deletes them (the migration pass is the one
//! exception, and it runs before anything else).

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Entry;

use super::codec;

/// Filename prefix for day-ledger files
pub const LEDGER_PREFIX: &str = "expenses_";

/// Filename suffix for day-ledger files
pub const LEDGER_SUFFIX: &str = ".txt";

/// Store over the day-ledger files inside one data directory
#[derive(Debug, Clone)]
pub struct LedgerDir {
    root: PathBuf,
}

impl LedgerDir {
    /// Create a store rooted at the given data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory this store reads and writes
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filename owning the given date, e.g. `expenses_2024-01-01.txt`
    pub fn file_name(date: &str) -> String {
        format!("{}{}{}", LEDGER_PREFIX, date, LEDGER_SUFFIX)
    }

    /// Full path of a ledger file by name
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// All day-ledger filenames, sorted lexicographically
    ///
    /// The fixed-width date in the name makes lexicographic order
    /// chronological. An unreadable or missing directory yields an empty
    /// list; read-side problems never surface as errors.
    pub fn list_files(&self) -> Vec<String> {
        let Ok(dir) = std::fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut names: Vec<String> = dir
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| is_ledger_file_name(name))
            .collect();

        names.sort();
        names
    }

    /// Lazily decode the entries of one ledger file, in file order
    ///
    /// Undecodable lines are skipped. An absent file yields an empty
    /// sequence, not an error.
    pub fn read_entries(&self, name: &str) -> impl Iterator<Item = Entry> {
        let reader = File::open(self.file_path(name)).ok().map(BufReader::new);

        reader.into_iter().flat_map(|r| {
            r.lines()
                .filter_map(|line| line.ok())
                .filter_map(|line| codec::decode_line(&line))
        })
    }

    /// Next sequential entry id for a ledger file
    ///
    /// Scans raw lines for the maximum id in the leading field and returns
    /// max + 1; returns 1 for an absent or empty file. The id counts even
    /// when the rest of its line does not decode, so repairing a broken line
    /// later cannot hand its id out twice. A max-scan, not a count: gaps
    /// left by skipped lines never shrink later ids.
    pub fn next_id(&self, name: &str) -> u32 {
        let Ok(file) = File::open(self.file_path(name)) else {
            return 1;
        };

        let max_id = BufReader::new(file)
            .lines()
            .filter_map(|line| line.ok())
            .filter_map(|line| {
                line.split('|')
                    .next()
                    .and_then(|field| field.trim().parse::<u32>().ok())
            })
            .max()
            .unwrap_or(0);

        max_id + 1
    }

    /// Append one entry to a ledger file, creating the file if absent
    ///
    /// The failure is reported, not fatal; the caller decides what to do with
    /// an entry that could not be written.
    pub fn append_entry(&self, name: &str, entry: &Entry) -> LedgerResult<()> {
        let path = self.file_path(name);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e))
            })?;

        writeln!(file, "{}", codec::encode_entry(entry)).map_err(|e| {
            LedgerError::Storage(format!("Failed to append to {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

/// Check whether a filename matches the day-ledger pattern
pub fn is_ledger_file_name(name: &str) -> bool {
    name.starts_with(LEDGER_PREFIX) && name.ends_with(LEDGER_SUFFIX)
}
