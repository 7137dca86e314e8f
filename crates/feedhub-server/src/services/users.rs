//! User service: CRUD, subscriptions and the delete cascade

use super::cascade;
use feedhub_core::{CreateUser, FeedError, FeedStore, Result, User, UserPatch};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct UserService {
    store: Arc<dyn FeedStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn FeedStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.store.list_users().await
    }

    pub async fn get(&self, id: &str) -> Result<User> {
        self.store
            .get_user(id)
            .await?
            .ok_or_else(|| FeedError::not_found("User", id))
    }

    pub async fn create(&self, req: CreateUser) -> Result<User> {
        let user = self.store.create_user(req).await?;
        info!("Created user {}", user.id);
        Ok(user)
    }

    pub async fn update(&self, id: &str, patch: UserPatch) -> Result<User> {
        self.store.update_user(id, patch).await
    }

    /// Delete a user and everything that depends on it
    pub async fn delete(&self, id: &str) -> Result<User> {
        let (user, report) = cascade::delete_user(self.store.as_ref(), id).await?;
        if report.failures > 0 {
            warn!(
                "User {} deleted with {} failed cleanup steps",
                id, report.failures
            );
        }
        Ok(user)
    }

    /// Make `subscriber_id` follow `target_id`.
    ///
    /// Re-subscribing appends the id again; following yourself is allowed.
    pub async fn subscribe(&self, target_id: &str, subscriber_id: &str) -> Result<User> {
        let subscriber = self.get(subscriber_id).await?;

        if self.store.get_user(target_id).await?.is_none() {
            return Err(FeedError::invalid(format!(
                "cannot subscribe to unknown user {}",
                target_id
            )));
        }

        let mut ids = subscriber.subscribed_to_user_ids;
        ids.push(target_id.to_string());

        debug!("User {} subscribes to {}", subscriber_id, target_id);
        self.store
            .update_user(subscriber_id, UserPatch::subscriptions(ids))
            .await
    }

    /// Make `subscriber_id` stop following `target_id`. Every occurrence of
    /// the target is removed.
    pub async fn unsubscribe(&self, target_id: &str, subscriber_id: &str) -> Result<User> {
        if self.store.get_user(target_id).await?.is_none() {
            return Err(FeedError::invalid(format!(
                "cannot unsubscribe from unknown user {}",
                target_id
            )));
        }

        let subscriber = self
            .store
            .get_user(subscriber_id)
            .await?
            .ok_or_else(|| FeedError::invalid(format!("unknown user {}", subscriber_id)))?;

        if !subscriber.is_subscribed_to(target_id) {
            return Err(FeedError::invalid(format!(
                "user {} is not subscribed to {}",
                subscriber_id, target_id
            )));
        }

        let ids: Vec<String> = subscriber
            .subscribed_to_user_ids
            .into_iter()
            .filter(|id| id != target_id)
            .collect();

        debug!("User {} unsubscribes from {}", subscriber_id, target_id);
        self.store
            .update_user(subscriber_id, UserPatch::subscriptions(ids))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::*;

    async fn service() -> UserService {
        UserService::new(seeded_store().await)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let users = service().await;
        let user = users.create(user_req("A")).await.unwrap();
        assert!(user.subscribed_to_user_ids.is_empty());
        assert_eq!(users.get(&user.id).await.unwrap(), user);
        assert!(users.get("missing").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_subscribe_appends_without_dedup() {
        let users = service().await;
        let ann = users.create(user_req("Ann")).await.unwrap();
        let bob = users.create(user_req("Bob")).await.unwrap();

        let bob = users.subscribe(&ann.id, &bob.id).await.unwrap();
        assert_eq!(bob.subscribed_to_user_ids, vec![ann.id.clone()]);

        let bob = users.subscribe(&ann.id, &bob.id).await.unwrap();
        assert_eq!(bob.subscribed_to_user_ids.len(), 2);

        let bob = users.subscribe(&bob.id, &bob.id).await.unwrap();
        assert_eq!(bob.subscribed_to_user_ids.len(), 3);
        assert_eq!(bob.subscribed_to_user_ids[2], bob.id);

        // The followed user is not modified
        assert!(users
            .get(&ann.id)
            .await
            .unwrap()
            .subscribed_to_user_ids
            .is_empty());
    }

    #[tokio::test]
    async fn test_subscribe_unknown_users() {
        let users = service().await;
        let ann = users.create(user_req("Ann")).await.unwrap();

        let err = users.subscribe(&ann.id, "missing").await.unwrap_err();
        assert!(err.is_not_found());

        let err = users.subscribe("missing", &ann.id).await.unwrap_err();
        assert!(err.is_invalid_request());
        assert!(users
            .get(&ann.id)
            .await
            .unwrap()
            .subscribed_to_user_ids
            .is_empty());
    }

    #[tokio::test]
    async fn test_unsubscribe_removes_all_occurrences() {
        let users = service().await;
        let ann = users.create(user_req("Ann")).await.unwrap();
        let bob = users.create(user_req("Bob")).await.unwrap();
        let cid = users.create(user_req("Cid")).await.unwrap();

        users.subscribe(&ann.id, &bob.id).await.unwrap();
        users.subscribe(&cid.id, &bob.id).await.unwrap();
        users.subscribe(&ann.id, &bob.id).await.unwrap();

        let bob = users.unsubscribe(&ann.id, &bob.id).await.unwrap();
        assert_eq!(bob.subscribed_to_user_ids, vec![cid.id.clone()]);
    }

    #[tokio::test]
    async fn test_unsubscribe_rejects_invalid_requests() {
        let users = service().await;
        let ann = users.create(user_req("Ann")).await.unwrap();
        let bob = users.create(user_req("Bob")).await.unwrap();

        // Not following
        let err = users.unsubscribe(&ann.id, &bob.id).await.unwrap_err();
        assert!(err.is_invalid_request());

        // Unknown subscriber
        let err = users.unsubscribe(&ann.id, "missing").await.unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[tokio::test]
    async fn test_unsubscribe_from_unknown_user() {
        let users = service().await;
        let bob = users.create(user_req("Bob")).await.unwrap();
        users.subscribe(&bob.id, &bob.id).await.unwrap();

        let err = users.unsubscribe("ghost", &bob.id).await.unwrap_err();
        assert!(err.is_invalid_request());
        assert!(err.to_string().contains("unknown user ghost"));

        // The subscription list is left alone
        assert_eq!(
            users.get(&bob.id).await.unwrap().subscribed_to_user_ids,
            vec![bob.id.clone()]
        );
    }

    #[tokio::test]
    async fn test_update_keeps_subscriptions() {
        let users = service().await;
        let ann = users.create(user_req("Ann")).await.unwrap();
        users.subscribe(&ann.id, &ann.id).await.unwrap();

        let patch = UserPatch {
            surname: Some("Smith".to_string()),
            ..Default::default()
        };
        let ann = users.update(&ann.id, patch).await.unwrap();
        assert_eq!(ann.surname, "Smith");
        assert_eq!(ann.subscribed_to_user_ids, vec![ann.id.clone()]);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let users = service().await;
        let ann = users.create(user_req("Ann")).await.unwrap();
        let bob = users.create(user_req("Bob")).await.unwrap();
        users.subscribe(&ann.id, &bob.id).await.unwrap();

        let deleted = users.delete(&ann.id).await.unwrap();
        assert_eq!(deleted.id, ann.id);
        assert!(users.get(&ann.id).await.unwrap_err().is_not_found());
        assert!(users
            .get(&bob.id)
            .await
            .unwrap()
            .subscribed_to_user_ids
            .is_empty());
        assert!(users.delete(&ann.id).await.unwrap_err().is_not_found());
    }
}
