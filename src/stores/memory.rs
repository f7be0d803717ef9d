//! In-memory coordination store for testing and development.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::error::SignalResult;
use crate::traits::signal::{SignalCommand, SignalStore};

/// One write made against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalRecord {
    /// Command that performed the write
    pub command: SignalCommand,

    /// Full key, namespace included
    pub key: String,

    /// Written value
    pub value: bool,
}

/// In-memory signal store.
///
/// Records every write for assertions. Useful for tests and development;
/// not suitable for production as data is lost on restart.
#[derive(Default)]
pub struct MemorySignalStore {
    writes: RwLock<Vec<SignalRecord>>,
}

impl MemorySignalStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes in order.
    pub fn writes(&self) -> Vec<SignalRecord> {
        self.writes.read().unwrap().clone()
    }

    /// Number of writes made under a key.
    pub fn write_count(&self, key: &str) -> usize {
        self.writes
            .read()
            .unwrap()
            .iter()
            .filter(|w| w.key == key)
            .count()
    }

    /// Last value written under a key, if any.
    pub fn value_of(&self, key: &str) -> Option<bool> {
        self.writes
            .read()
            .unwrap()
            .iter()
            .rev()
            .find(|w| w.key == key)
            .map(|w| w.value)
    }

    /// Clear all recorded writes.
    pub fn clear(&self) {
        self.writes.write().unwrap().clear();
    }
}

#[async_trait]
impl SignalStore for MemorySignalStore {
    async fn signal(&self, command: SignalCommand, key: &str, value: bool) -> SignalResult<()> {
        self.writes.write().unwrap().push(SignalRecord {
            command,
            key: key.to_string(),
            value,
        });
        Ok(())
    }
}
