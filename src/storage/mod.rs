//! Flat-file storage layer
//!
//! Two stores share one data directory: `LedgerDir` over the per-day expense
//! files and `BalanceStore` over the single balance record. The service layer
//! is the only writer of either.

pub mod balance;
pub mod codec;
pub mod file_io;
pub mod ledger_files;
pub mod migrate;

pub use balance::{Balance, BalanceStore};
pub use ledger_files::LedgerDir;
pub use migrate::migrate_legacy_files;
