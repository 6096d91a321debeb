//! Business logic layer

pub mod ledger;

pub use ledger::{BalanceReport, LedgerService, Outcome, Rejection, SearchHit};
