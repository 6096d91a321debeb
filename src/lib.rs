//! Daybook - terminal daily expense ledger over plain text files
//!
//! Records dated expenses against a maintained balance. One plain text file
//! per day (`expenses_YYYY-MM-DD.txt`, pipe-delimited), plus a single balance
//! record (`balance.txt`). Supports top-ups, overspend prevention and linear
//! search across every recorded entry.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: data directory resolution
//! - `error`: custom error types
//! - `models`: core data models (money, expense entries)
//! - `storage`: flat-file storage layer (line codec, day-ledger files,
//!   balance record, legacy migration)
//! - `services`: business logic layer
//! - `display`: terminal formatting
//! - `menu`: the interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use daybook::config::LedgerPaths;
//! use daybook::services::LedgerService;
//!
//! let paths = LedgerPaths::new();
//! let service = LedgerService::new(&paths);
//! let report = service.balance_report();
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
