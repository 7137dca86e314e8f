//! In-memory entity store using DashMap

use async_trait::async_trait;
use dashmap::DashMap;
use feedhub_core::{
    CreatePost, CreateProfile, CreateUser, FeedError, MemberType, MemberTypePatch,
    MemberTypeStore, Post, PostPatch, PostStore, Profile, ProfilePatch, ProfileStore, Result,
    User, UserPatch, UserStore,
};
use std::sync::atomic::{AtomicU64, Ordering};

/// One collection of records keyed by id.
///
/// Every entry carries an insertion sequence number so listings come back
/// in creation order even though the map itself is unordered.
struct Collection<T> {
    entity: &'static str,
    data: DashMap<String, Entry<T>>,
    next_seq: AtomicU64,
}

struct Entry<T> {
    seq: u64,
    value: T,
}

impl<T: Clone> Collection<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            entity,
            data: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    fn insert(&self, id: String, value: T) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.data.insert(id, Entry { seq, value });
    }

    fn get(&self, id: &str) -> Option<T> {
        self.data.get(id).map(|entry| entry.value.clone())
    }

    /// All records matching `pred`, oldest first
    fn find_many(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        let mut found: Vec<(u64, T)> = self
            .data
            .iter()
            .filter(|entry| pred(&entry.value))
            .map(|entry| (entry.seq, entry.value.clone()))
            .collect();
        found.sort_by_key(|(seq, _)| *seq);
        found.into_iter().map(|(_, value)| value).collect()
    }

    /// First record matching `pred` in creation order
    fn find_one(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.data
            .iter()
            .filter(|entry| pred(&entry.value))
            .min_by_key(|entry| entry.seq)
            .map(|entry| entry.value.clone())
    }

    fn change(&self, id: &str, apply: impl FnOnce(&mut T)) -> Result<T> {
        let mut entry = self
            .data
            .get_mut(id)
            .ok_or_else(|| FeedError::not_found(self.entity, id))?;
        apply(&mut entry.value);
        Ok(entry.value.clone())
    }

    fn delete(&self, id: &str) -> Result<T> {
        self.data
            .remove(id)
            .map(|(_, entry)| entry.value)
            .ok_or_else(|| FeedError::not_found(self.entity, id))
    }
}

/// In-memory store holding all four collections
pub struct MemoryStore {
    users: Collection<User>,
    posts: Collection<Post>,
    profiles: Collection<Profile>,
    member_types: Collection<MemberType>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: Collection::new("User"),
            posts: Collection::new("Post"),
            profiles: Collection::new("Profile"),
            member_types: Collection::new("MemberType"),
        }
    }

    fn new_id() -> String {
        uuid::Uuid::now_v7().to_string()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, req: CreateUser) -> Result<User> {
        let user = User::new(Self::new_id(), req);
        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.get(id))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.find_many(|_| true))
    }

    async fn list_users_subscribed_to(&self, user_id: &str) -> Result<Vec<User>> {
        Ok(self.users.find_many(|u| u.is_subscribed_to(user_id)))
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<User> {
        self.users.change(id, |user| patch.apply(user))
    }

    async fn delete_user(&self, id: &str) -> Result<User> {
        self.users.delete(id)
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn create_post(&self, req: CreatePost) -> Result<Post> {
        let post = Post::new(Self::new_id(), req);
        self.posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.posts.get(id))
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.find_many(|_| true))
    }

    async fn list_posts_by_user(&self, user_id: &str) -> Result<Vec<Post>> {
        Ok(self.posts.find_many(|p| p.user_id == user_id))
    }

    async fn update_post(&self, id: &str, patch: PostPatch) -> Result<Post> {
        self.posts.change(id, |post| patch.apply(post))
    }

    async fn delete_post(&self, id: &str) -> Result<Post> {
        self.posts.delete(id)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn create_profile(&self, req: CreateProfile) -> Result<Profile> {
        let profile = Profile::new(Self::new_id(), req);
        self.profiles.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    async fn get_profile(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.get(id))
    }

    async fn get_profile_by_user(&self, user_id: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.find_one(|p| p.user_id == user_id))
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        Ok(self.profiles.find_many(|_| true))
    }

    async fn update_profile(&self, id: &str, patch: ProfilePatch) -> Result<Profile> {
        self.profiles.change(id, |profile| patch.apply(profile))
    }

    async fn delete_profile(&self, id: &str) -> Result<Profile> {
        self.profiles.delete(id)
    }
}

#[async_trait]
impl MemberTypeStore for MemoryStore {
    async fn insert_member_type(&self, member_type: MemberType) -> Result<()> {
        self.member_types
            .insert(member_type.id.clone(), member_type);
        Ok(())
    }

    async fn get_member_type(&self, id: &str) -> Result<Option<MemberType>> {
        Ok(self.member_types.get(id))
    }

    async fn list_member_types(&self) -> Result<Vec<MemberType>> {
        Ok(self.member_types.find_many(|_| true))
    }

    async fn update_member_type(&self, id: &str, patch: MemberTypePatch) -> Result<MemberType> {
        self.member_types.change(id, |member_type| patch.apply(member_type))
    }
}
