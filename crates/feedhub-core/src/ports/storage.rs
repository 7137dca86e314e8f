//! Storage traits for the entity collections
//!
//! Stores assign ids and persist records; they do no domain validation.
//! `update_*` and `delete_*` fail with [`FeedError::NotFound`] when the id
//! is absent. List operations return records in creation order.
//!
//! [`FeedError::NotFound`]: crate::FeedError::NotFound

use crate::Result;
use async_trait::async_trait;
use feedhub_types::{
    CreatePost, CreateProfile, CreateUser, MemberType, MemberTypePatch, Post, PostPatch, Profile,
    ProfilePatch, User, UserPatch,
};

/// User store
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, req: CreateUser) -> Result<User>;
    async fn get_user(&self, id: &str) -> Result<Option<User>>;
    async fn list_users(&self) -> Result<Vec<User>>;
    /// Users whose subscription list contains `user_id`
    async fn list_users_subscribed_to(&self, user_id: &str) -> Result<Vec<User>>;
    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<User>;
    async fn delete_user(&self, id: &str) -> Result<User>;
}

/// Post store
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create_post(&self, req: CreatePost) -> Result<Post>;
    async fn get_post(&self, id: &str) -> Result<Option<Post>>;
    async fn list_posts(&self) -> Result<Vec<Post>>;
    async fn list_posts_by_user(&self, user_id: &str) -> Result<Vec<Post>>;
    async fn update_post(&self, id: &str, patch: PostPatch) -> Result<Post>;
    async fn delete_post(&self, id: &str) -> Result<Post>;
}

/// Profile store
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn create_profile(&self, req: CreateProfile) -> Result<Profile>;
    async fn get_profile(&self, id: &str) -> Result<Option<Profile>>;
    async fn get_profile_by_user(&self, user_id: &str) -> Result<Option<Profile>>;
    async fn list_profiles(&self) -> Result<Vec<Profile>>;
    async fn update_profile(&self, id: &str, patch: ProfilePatch) -> Result<Profile>;
    async fn delete_profile(&self, id: &str) -> Result<Profile>;
}

/// Member type store. Member types have fixed ids and are only seeded,
/// never created through the API.
#[async_trait]
pub trait MemberTypeStore: Send + Sync {
    async fn insert_member_type(&self, member_type: MemberType) -> Result<()>;
    async fn get_member_type(&self, id: &str) -> Result<Option<MemberType>>;
    async fn list_member_types(&self) -> Result<Vec<MemberType>>;
    async fn update_member_type(&self, id: &str, patch: MemberTypePatch) -> Result<MemberType>;
}

/// A backend holding every collection
pub trait FeedStore: UserStore + PostStore + ProfileStore + MemberTypeStore {}

impl<T> FeedStore for T where T: UserStore + PostStore + ProfileStore + MemberTypeStore {}
