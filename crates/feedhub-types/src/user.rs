//! User types

use serde::{Deserialize, Serialize};

/// A user of the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub age: u32,
    /// Ids of the users this user follows, in subscription order.
    /// Duplicates are allowed.
    pub subscribed_to_user_ids: Vec<String>,
}

impl User {
    pub fn new(id: String, req: CreateUser) -> Self {
        Self {
            id,
            name: req.name,
            surname: req.surname,
            age: req.age,
            subscribed_to_user_ids: Vec::new(),
        }
    }

    pub fn is_subscribed_to(&self, user_id: &str) -> bool {
        self.subscribed_to_user_ids.iter().any(|id| id == user_id)
    }
}

/// User creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUser {
    pub name: String,
    pub surname: String,
    pub age: u32,
}

/// Partial user update
///
/// The subscription list is not accepted from request bodies; it only
/// changes through the subscribe/unsubscribe operations and the delete
/// cascade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip)]
    pub subscribed_to_user_ids: Option<Vec<String>>,
}

impl UserPatch {
    /// Patch that replaces only the subscription list
    pub fn subscriptions(ids: Vec<String>) -> Self {
        Self {
            subscribed_to_user_ids: Some(ids),
            ..Default::default()
        }
    }

    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(surname) = self.surname {
            user.surname = surname;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        if let Some(ids) = self.subscribed_to_user_ids {
            user.subscribed_to_user_ids = ids;
        }
    }
}
