//! Profile service with the profile integrity rules

use feedhub_core::{CreateProfile, FeedError, FeedStore, Profile, ProfilePatch, Result};
use std::sync::Arc;
use tracing::info;

pub struct ProfileService {
    store: Arc<dyn FeedStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn FeedStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Profile>> {
        self.store.list_profiles().await
    }

    pub async fn get(&self, id: &str) -> Result<Profile> {
        self.store
            .get_profile(id)
            .await?
            .ok_or_else(|| FeedError::not_found("Profile", id))
    }

    /// Create a profile.
    ///
    /// The user must exist and have no profile yet, and the member type must
    /// exist. Checks run in that order and nothing is stored unless all pass.
    pub async fn create(&self, req: CreateProfile) -> Result<Profile> {
        if self.store.get_user(&req.user_id).await?.is_none() {
            return Err(FeedError::invalid(format!(
                "user {} does not exist",
                req.user_id
            )));
        }

        if self.store.get_profile_by_user(&req.user_id).await?.is_some() {
            return Err(FeedError::invalid("user already has a profile"));
        }

        self.ensure_member_type(&req.member_type_id).await?;

        let profile = self.store.create_profile(req).await?;
        info!("Created profile {} for user {}", profile.id, profile.user_id);
        Ok(profile)
    }

    pub async fn update(&self, id: &str, patch: ProfilePatch) -> Result<Profile> {
        if self.store.get_profile(id).await?.is_none() {
            return Err(FeedError::not_found("Profile", id));
        }
        if let Some(member_type_id) = &patch.member_type_id {
            self.ensure_member_type(member_type_id).await?;
        }

        self.store.update_profile(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<Profile> {
        self.store.delete_profile(id).await
    }

    async fn ensure_member_type(&self, id: &str) -> Result<()> {
        match self.store.get_member_type(id).await? {
            Some(_) => Ok(()),
            None => Err(FeedError::invalid(format!("member type {} does not exist", id))),
        }
    }
}
