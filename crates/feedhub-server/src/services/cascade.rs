//! User deletion cascade
//!
//! Dependent cleanup is best-effort: a failing step is logged and the
//! cascade moves on. Nothing is rolled back, so a failure can leave
//! orphaned posts or stale subscription ids behind.

use feedhub_core::{FeedError, FeedStore, Result, User, UserPatch};
use tracing::{debug, info, warn};

/// What the cascade removed besides the user record
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct CascadeReport {
    pub(crate) posts_deleted: usize,
    pub(crate) profile_deleted: bool,
    pub(crate) subscribers_updated: usize,
    pub(crate) failures: usize,
}

/// Delete `user_id` together with its posts, its profile and every
/// reference to it in other users' subscription lists.
pub(crate) async fn delete_user(store: &dyn FeedStore, user_id: &str) -> Result<(User, CascadeReport)> {
    if store.get_user(user_id).await?.is_none() {
        return Err(FeedError::not_found("User", user_id));
    }

    let mut report = CascadeReport::default();

    delete_posts(store, user_id, &mut report).await;
    delete_profile(store, user_id, &mut report).await;
    drop_from_subscriptions(store, user_id, &mut report).await;

    let user = store.delete_user(user_id).await?;
    info!(
        "Deleted user {}: posts={}, profile={}, subscribers={}, failures={}",
        user_id,
        report.posts_deleted,
        report.profile_deleted,
        report.subscribers_updated,
        report.failures
    );
    Ok((user, report))
}

async fn delete_posts(store: &dyn FeedStore, user_id: &str, report: &mut CascadeReport) {
    let posts = match store.list_posts_by_user(user_id).await {
        Ok(posts) => posts,
        Err(e) => {
            warn!("Failed to list posts of user {}: {}", user_id, e);
            report.failures += 1;
            return;
        }
    };

    for post in posts {
        match store.delete_post(&post.id).await {
            Ok(_) => {
                debug!("Deleted post {} of user {}", post.id, user_id);
                report.posts_deleted += 1;
            }
            Err(e) => {
                warn!("Failed to delete post {}: {}", post.id, e);
                report.failures += 1;
            }
        }
    }
}

async fn delete_profile(store: &dyn FeedStore, user_id: &str, report: &mut CascadeReport) {
    let profile = match store.get_profile_by_user(user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return,
        Err(e) => {
            warn!("Failed to look up profile of user {}: {}", user_id, e);
            report.failures += 1;
            return;
        }
    };

    match store.delete_profile(&profile.id).await {
        Ok(_) => report.profile_deleted = true,
        Err(e) => {
            warn!("Failed to delete profile {}: {}", profile.id, e);
            report.failures += 1;
        }
    }
}

async fn drop_from_subscriptions(store: &dyn FeedStore, user_id: &str, report: &mut CascadeReport) {
    let subscribers = match store.list_users_subscribed_to(user_id).await {
        Ok(users) => users,
        Err(e) => {
            warn!("Failed to list subscribers of user {}: {}", user_id, e);
            report.failures += 1;
            return;
        }
    };

    for subscriber in subscribers {
        let remaining: Vec<String> = subscriber
            .subscribed_to_user_ids
            .into_iter()
            .filter(|id| id != user_id)
            .collect();

        match store
            .update_user(&subscriber.id, UserPatch::subscriptions(remaining))
            .await
        {
            Ok(_) => report.subscribers_updated += 1,
            Err(e) => {
                warn!("Failed to update subscriptions of {}: {}", subscriber.id, e);
                report.failures += 1;
            }
        }
    }
}
