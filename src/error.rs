//! Custom error types for Daybook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Note that input validation failures are
//! NOT errors here; the service layer reports those as `Rejection` values so
//! the menu can always recover. `LedgerError` is reserved for I/O the stores
//! could not complete.

use thiserror::Error;

/// The main error type for Daybook operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (a store could not read or write its file)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Daybook operations
pub type LedgerResult<T> = Result<T, LedgerError>;
