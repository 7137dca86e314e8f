//! Storage layer
//!
//! Uses DashMap (in-memory) collections. Nothing is persisted across
//! restarts.

pub mod memory;

pub use memory::MemoryStore;
