//! Balance record store
//!
//! The record is one line in `balance.txt`: `initial,current`, both to two
//! decimals. `initial` is all money ever made available; `current` is what is
//! left after every recorded expense.
//!
//! Loading never fails. An absent, empty or unreadable record reads as
//! `(0.00, 0.00)` — default-on-corruption is a deliberate policy so the menu
//! always has a balance to show, not an overlooked error path.

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::models::Money;

use super::file_io::write_text_atomic;

/// The persisted balance pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance {
    /// Cumulative money made available: starting balance plus all top-ups
    pub initial: Money,
    /// Money still available: `initial` minus all recorded expenses
    pub current: Money,
}

/// Store for the single balance record
#[derive(Debug, Clone)]
pub struct BalanceStore {
    path: PathBuf,
}

impl BalanceStore {
    /// Create a store over the given balance file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the balance record, defaulting to zeros
    ///
    /// Accepts the current `initial,current` form or a single legacy value
    /// (both fields take it). Fields past the second are ignored. Any read or
    /// parse failure yields the zero balance.
    pub fn load(&self) -> Balance {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Balance::default();
        };

        parse_record(raw.trim()).unwrap_or_default()
    }

    /// Persist the balance record, overwriting the previous one
    pub fn save(&self, balance: &Balance) -> LedgerResult<()> {
        let line = format!("{},{}\n", balance.initial, balance.current);
        write_text_atomic(&self.path, &line)
    }
}

fn parse_record(raw: &str) -> Option<Balance> {
    if raw.is_empty() {
        return None;
    }

    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [single] => {
            let value = Money::parse(single).ok()?;
            Some(Balance {
                initial: value,
                current: value,
            })
        }
        [initial, current, ..] => Some(Balance {
            initial: Money::parse(initial).ok()?,
            current: Money::parse(current).ok()?,
        }),
        [] => None,
    }
}
