//! Ledger service
//!
//! Orchestrates the balance store and the day-ledger files: recording
//! expenses with overspend prevention, topping up the balance, and the
//! linear search / totalling queries the menu exposes.
//!
//! Input problems come back as `Outcome::Rejected` values so the caller can
//! print them and move on; `LedgerError` only ever means a write the store
//! could not complete.

use std::fmt;

use chrono::Local;

use crate::config::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{is_valid_date, Entry, Money};
use crate::storage::{Balance, BalanceStore, LedgerDir};

/// Timestamp format written into new entries
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Why an operation was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Date is not in `YYYY-MM-DD` shape
    InvalidDate(String),
    /// Item description was empty
    EmptyItem,
    /// Amount was zero or negative
    NonPositiveAmount,
    /// Amount exceeds the available balance
    InsufficientBalance { available: Money },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(date) => {
                write!(f, "Invalid date format: '{}'. Expected YYYY-MM-DD.", date)
            }
            Self::EmptyItem => write!(f, "Item name cannot be empty."),
            Self::NonPositiveAmount => write!(f, "Amount must be a positive number."),
            Self::InsufficientBalance { available } => {
                write!(f, "Insufficient balance! Available: {}.", available)
            }
        }
    }
}

/// Result of a mutating ledger operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operation went through; carries the balance left afterwards
    Accepted { new_current: Money },
    /// The operation was refused before anything was written
    Rejected(Rejection),
}

/// The three figures of the balance report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceReport {
    pub initial: Money,
    pub spent: Money,
    pub current: Money,
}

/// One search result: the owning file plus the entry itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub file: String,
    pub entry: Entry,
}

/// Service over one data directory's ledger and balance
///
/// Sole writer of both stores; the presentation layer goes through here for
/// every mutation.
pub struct LedgerService {
    ledgers: LedgerDir,
    balance: BalanceStore,
}

impl LedgerService {
    /// Create a service over the given paths
    pub fn new(paths: &LedgerPaths) -> Self {
        Self {
            ledgers: LedgerDir::new(paths.data_dir()),
            balance: BalanceStore::new(paths.balance_file()),
        }
    }

    /// The stored balance pair, as-is
    ///
    /// Trusted, not recomputed: external edits to the ledger files can make
    /// this drift from the file sum, and that is accepted.
    pub fn balance(&self) -> Balance {
        self.balance.load()
    }

    /// Sum of every entry amount across every day-ledger file
    pub fn total_spent(&self) -> Money {
        self.all_entries().map(|hit| hit.entry.amount).sum()
    }

    /// The figures the "check balance" screen shows
    pub fn balance_report(&self) -> BalanceReport {
        let balance = self.balance.load();
        BalanceReport {
            initial: balance.initial,
            spent: self.total_spent(),
            current: balance.current,
        }
    }

    /// Record an expense against the balance
    ///
    /// Refused when the date is malformed, the item is empty, the amount is
    /// not strictly positive, or the amount exceeds the available balance.
    /// On acceptance the entry is appended to its date's file and the new
    /// balance is persisted. If the append fails the balance is left
    /// untouched and the error propagates.
    pub fn add_expense(&self, date: &str, item: &str, amount: Money) -> LedgerResult<Outcome> {
        let balance = self.balance.load();

        if !is_valid_date(date) {
            return Ok(Outcome::Rejected(Rejection::InvalidDate(date.to_string())));
        }

        let item = item.trim();
        if item.is_empty() {
            return Ok(Outcome::Rejected(Rejection::EmptyItem));
        }

        if !amount.is_positive() {
            return Ok(Outcome::Rejected(Rejection::NonPositiveAmount));
        }

        if amount > balance.current {
            return Ok(Outcome::Rejected(Rejection::InsufficientBalance {
                available: balance.current,
            }));
        }

        let name = LedgerDir::file_name(date);
        let entry = Entry::new(
            self.ledgers.next_id(&name),
            date,
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
            item,
            amount,
        );

        // Append first; a failed append must not move the balance
        self.ledgers.append_entry(&name, &entry)?;

        let new_balance = Balance {
            initial: balance.initial,
            current: balance.current - amount,
        };
        self.balance.save(&new_balance)?;

        Ok(Outcome::Accepted {
            new_current: new_balance.current,
        })
    }

    /// Add money to the balance
    ///
    /// Both `initial` and `current` grow by the amount; persisted
    /// immediately. Refused for amounts that are not strictly positive.
    pub fn top_up(&self, amount: Money) -> LedgerResult<Outcome> {
        if !amount.is_positive() {
            return Ok(Outcome::Rejected(Rejection::NonPositiveAmount));
        }

        let balance = self.balance.load();
        let new_balance = Balance {
            initial: balance.initial + amount,
            current: balance.current + amount,
        };
        self.balance.save(&new_balance)?;

        Ok(Outcome::Accepted {
            new_current: new_balance.current,
        })
    }

    /// Case-insensitive substring search over item descriptions
    ///
    /// Files scan in chronological (filename) order, entries in file order.
    pub fn search_by_item(&self, text: &str) -> Vec<SearchHit> {
        let needle = text.to_lowercase();
        self.all_entries()
            .filter(|hit| hit.entry.item.to_lowercase().contains(&needle))
            .collect()
    }

    /// Exact-equality search over amounts, same ordering as `search_by_item`
    pub fn search_by_amount(&self, target: Money) -> Vec<SearchHit> {
        self.all_entries()
            .filter(|hit| hit.entry.amount == target)
            .collect()
    }

    fn all_entries(&self) -> impl Iterator<Item = SearchHit> + '_ {
        self.ledgers.list_files().into_iter().flat_map(move |file| {
            self.ledgers
                .read_entries(&file)
                .map(move |entry| SearchHit {
                    file: file.clone(),
                    entry,
                })
                .collect::<Vec<_>>()
        })
    }
}
