//! Expense entry model
//!
//! One entry is one line in a day-ledger file. The `date` decides which file
//! owns the entry; the `timestamp` records when it was written and is purely
//! informational.

use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Identifier, unique within the owning day file, assigned from 1 upward
    pub id: u32,

    /// Calendar date in `YYYY-MM-DD` form; names the owning file
    pub date: String,

    /// Creation time, `YYYY-MM-DD HH:MM:SS`; informational only
    pub timestamp: String,

    /// What the money was spent on; never empty for entries this system wrote
    pub item: String,

    /// Amount spent, always positive for entries this system wrote
    pub amount: Money,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        id: u32,
        date: impl Into<String>,
        timestamp: impl Into<String>,
        item: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            timestamp: timestamp.into(),
            item: item.into(),
            amount,
        }
    }
}

/// Light validation for a `YYYY-MM-DD` date string
///
/// Checks shape only: exactly 10 characters, split on `-` into three
/// non-empty all-digit segments. Deliberately no calendar check; the ledger
/// accepts "2024-13-32" and files it like any other date. This keeps the tool
/// forgiving about how users label their days.
pub fn is_valid_date(date: &str) -> bool {
    if date.len() != 10 {
        return false;
    }

    let mut segments = 0;
    for segment in date.split('-') {
        segments += 1;
        if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }

    segments == 3
}
