//! Business logic services
//!
//! Every referential check and multi-step mutation lives here; the store
//! underneath only persists records.

pub mod cascade;
pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod users;

pub use member_types::MemberTypeService;
pub use posts::PostService;
pub use profiles::ProfileService;
pub use users::UserService;
