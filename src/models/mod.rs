//! Core data models

pub mod entry;
pub mod money;

pub use entry::{is_valid_date, Entry};
pub use money::{Money, MoneyParseError};
