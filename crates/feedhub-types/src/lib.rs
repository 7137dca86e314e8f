//! Feedhub Types - Pure type definitions
//!
//! Entities, create requests and partial updates shared by the core library
//! and the server. No async runtime dependencies live here.

pub mod member_type;
pub mod post;
pub mod profile;
pub mod user;

pub use member_type::*;
pub use post::*;
pub use profile::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Body of the subscribe/unsubscribe endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubscriptionRequest {
    /// The subscribing user
    pub user_id: String,
}
