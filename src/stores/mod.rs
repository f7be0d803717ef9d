//! Coordination-store implementations.

pub mod memory;

pub use memory::MemorySignalStore;
