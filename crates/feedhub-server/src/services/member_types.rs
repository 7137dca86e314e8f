//! Member type service

use feedhub_core::{FeedError, FeedStore, MemberType, MemberTypeId, MemberTypePatch, Result};
use std::sync::Arc;
use tracing::info;

pub struct MemberTypeService {
    store: Arc<dyn FeedStore>,
}

impl MemberTypeService {
    pub fn new(store: Arc<dyn FeedStore>) -> Self {
        Self { store }
    }

    /// Insert the default member types that are not present yet
    pub async fn seed_defaults(&self) -> Result<()> {
        for id in MemberTypeId::ALL {
            if self.store.get_member_type(id.as_str()).await?.is_none() {
                self.store
                    .insert_member_type(id.default_member_type())
                    .await?;
                info!("Seeded member type {}", id);
            }
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<MemberType>> {
        self.store.list_member_types().await
    }

    pub async fn get(&self, id: &str) -> Result<MemberType> {
        self.store
            .get_member_type(id)
            .await?
            .ok_or_else(|| FeedError::not_found("MemberType", id))
    }

    pub async fn update(&self, id: &str, patch: MemberTypePatch) -> Result<MemberType> {
        self.store.update_member_type(id, patch).await
    }
}
