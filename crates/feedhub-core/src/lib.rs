//! Feedhub Core Library
//!
//! Domain types, the error model and the storage ports shared by every
//! store backend.

// Re-export pure types from feedhub-types
pub use feedhub_types::*;

pub mod error;
pub mod ports;

pub use error::{FeedError, Result};
pub use ports::{FeedStore, MemberTypeStore, PostStore, ProfileStore, UserStore};
