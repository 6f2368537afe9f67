//! Calculation history ledger
//!
//! Append-only record of calculation attempts with bounded retention.
//!
//! # Invariants
//!
//! - At most `capacity` entries are held (100 by default)
//! - Insertion order is preserved
//! - Eviction removes the oldest entries first
//! - Entries are never modified after creation
//! - Reads return detached snapshots

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod config;
pub mod error;
pub mod ledger;
pub mod types;

// Re-exports
pub use config::LedgerConfig;
pub use error::{Error, Result};
pub use ledger::HistoryLedger;
pub use types::HistoryEntry;
