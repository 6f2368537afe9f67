//! Bounded, append-only calculation history
//!
//! One ledger instance is shared by every request for the life of the
//! process. All operations go through a single mutex; none of them block on
//! anything other than that lock.
//!
//! # Example
//!
//! ```
//! use history_ledger::{HistoryLedger, LedgerConfig};
//!
//! let ledger = HistoryLedger::new(&LedgerConfig::default());
//! assert!(ledger.is_empty());
//! assert_eq!(ledger.capacity(), 100);
//! ```

use crate::{config::LedgerConfig, types::HistoryEntry};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// In-memory history with bounded retention
#[derive(Debug)]
pub struct HistoryLedger {
    entries: Mutex<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl HistoryLedger {
    /// Create an empty ledger from configuration
    pub fn new(config: &LedgerConfig) -> Self {
        Self::with_capacity(config.capacity)
    }

    /// Create an empty ledger retaining at most `capacity` entries
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest entries beyond capacity
    ///
    /// Returns the number of entries retained right after the append.
    pub fn append(&self, entry: HistoryEntry) -> usize {
        let mut entries = self.entries.lock();
        entries.push_back(entry);

        let excess = entries.len().saturating_sub(self.capacity);
        if excess > 0 {
            entries.drain(..excess);
            tracing::debug!(evicted = excess, "history at capacity, dropped oldest entries");
        }
        entries.len()
    }

    /// Snapshot of all entries in insertion order
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<HistoryEntry> {
        self.entries.lock().back().cloned()
    }

    /// Remove every entry
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let cleared = entries.len();
        entries.clear();
        tracing::info!(cleared, "history cleared");
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True if no entries are retained
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Retention limit
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new(&LedgerConfig::default())
    }
}
