//! Post service

use feedhub_core::{CreatePost, FeedError, FeedStore, Post, PostPatch, Result};
use std::sync::Arc;
use tracing::info;

pub struct PostService {
    store: Arc<dyn FeedStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn FeedStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Post>> {
        self.store.list_posts().await
    }

    pub async fn get(&self, id: &str) -> Result<Post> {
        self.store
            .get_post(id)
            .await?
            .ok_or_else(|| FeedError::not_found("Post", id))
    }

    /// Create a post. `userId` is stored as given, without a lookup.
    pub async fn create(&self, req: CreatePost) -> Result<Post> {
        let post = self.store.create_post(req).await?;
        info!("Created post {} for user {}", post.id, post.user_id);
        Ok(post)
    }

    pub async fn update(&self, id: &str, patch: PostPatch) -> Result<Post> {
        self.store.update_post(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<Post> {
        self.store.delete_post(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::*;

    #[tokio::test]
    async fn test_post_lifecycle() {
        let store = seeded_store().await;
        let posts = PostService::new(store.clone());
        let ann = store.create_user(user_req("Ann")).await.unwrap();

        let post = posts.create(post_req(&ann.id)).await.unwrap();
        assert_eq!(posts.get(&post.id).await.unwrap(), post);

        let post = posts
            .update(
                &post.id,
                PostPatch {
                    content: Some("edited".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(post.content, "edited");

        posts.delete(&post.id).await.unwrap();
        assert!(posts.get(&post.id).await.unwrap_err().is_not_found());
        assert!(posts.delete(&post.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_create_keeps_unresolved_user_id() {
        let posts = PostService::new(seeded_store().await);
        let post = posts.create(post_req("missing")).await.unwrap();
        assert_eq!(post.user_id, "missing");
        assert_eq!(posts.list().await.unwrap(), vec![post]);
    }
}
