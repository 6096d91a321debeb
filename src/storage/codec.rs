//! Ledger record codec
//!
//! Encodes and decodes one expense entry to and from its on-disk line form:
//!
//! ```text
//! id | date | timestamp | item | amount
//! ```
//!
//! Decoding is deliberately lenient. A line that does not parse is simply not
//! an entry; callers never see a parse error, only an absent value. The store
//! favors availability over strict validation of data it did not just write.

use crate::models::{Entry, Money};

/// Number of fields in a ledger line
const FIELD_COUNT: usize = 5;

/// Classification of a raw ledger line, used by the migration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFormat {
    /// Pipe-delimited, five fields (trimmed)
    Canonical([String; FIELD_COUNT]),
    /// Comma-delimited, five fields, no pipe anywhere (the pre-migration form)
    Legacy([String; FIELD_COUNT]),
    /// Anything else; passed through untouched by migration
    Unparseable,
}

/// Decode one raw line into an entry
///
/// Returns `None` when the line does not have exactly five pipe-delimited
/// fields, or when `id` is not a base-10 integer, or when `amount` is not a
/// decimal number. The `date`, `timestamp` and `item` fields are taken as-is
/// (trimmed); nothing validates them here.
pub fn decode_line(raw: &str) -> Option<Entry> {
    let fields: Vec<&str> = raw.split('|').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let id: u32 = fields[0].parse().ok()?;
    let amount = Money::parse(fields[4]).ok()?;

    Some(Entry {
        id,
        date: fields[1].to_string(),
        timestamp: fields[2].to_string(),
        item: fields[3].to_string(),
        amount,
    })
}

/// Encode an entry in canonical form: single space around each `|`, amount to
/// exactly two decimal places
pub fn encode_entry(entry: &Entry) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        entry.id, entry.date, entry.timestamp, entry.item, entry.amount
    )
}

/// Classify a raw line for the migration pass
///
/// Canonical beats legacy: any line containing a `|` is never treated as
/// comma-delimited, even if it also contains commas (item names may).
pub fn classify_line(raw: &str) -> LineFormat {
    if raw.contains('|') {
        match split_fields(raw, '|') {
            Some(fields) => LineFormat::Canonical(fields),
            None => LineFormat::Unparseable,
        }
    } else {
        match split_fields(raw, ',') {
            Some(fields) => LineFormat::Legacy(fields),
            None => LineFormat::Unparseable,
        }
    }
}

/// Join five fields back into a canonical line
pub fn join_canonical(fields: &[String; FIELD_COUNT]) -> String {
    fields.join(" | ")
}

fn split_fields(raw: &str, delimiter: char) -> Option<[String; FIELD_COUNT]> {
    let fields: Vec<String> = raw.split(delimiter).map(|f| f.trim().to_string()).collect();
    fields.try_into().ok()
}
