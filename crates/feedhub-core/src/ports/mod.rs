//! Ports (traits) implemented by storage backends

pub mod storage;

pub use storage::*;
