//! Profile types

use serde::{Deserialize, Serialize};

/// Extended user information, at most one per user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub member_type_id: String,
    pub avatar: String,
    pub sex: String,
    /// Unix timestamp
    pub birthday: i64,
    pub country: String,
    pub street: String,
    pub city: String,
}

impl Profile {
    pub fn new(id: String, req: CreateProfile) -> Self {
        Self {
            id,
            user_id: req.user_id,
            member_type_id: req.member_type_id,
            avatar: req.avatar,
            sex: req.sex,
            birthday: req.birthday,
            country: req.country,
            street: req.street,
            city: req.city,
        }
    }
}

/// Profile creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProfile {
    pub user_id: String,
    pub member_type_id: String,
    pub avatar: String,
    pub sex: String,
    pub birthday: i64,
    pub country: String,
    pub street: String,
    pub city: String,
}

/// Partial profile update. The owning user cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl ProfilePatch {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(member_type_id) = self.member_type_id {
            profile.member_type_id = member_type_id;
        }
        if let Some(avatar) = self.avatar {
            profile.avatar = avatar;
        }
        if let Some(sex) = self.sex {
            profile.sex = sex;
        }
        if let Some(birthday) = self.birthday {
            profile.birthday = birthday;
        }
        if let Some(country) = self.country {
            profile.country = country;
        }
        if let Some(street) = self.street {
            profile.street = street;
        }
        if let Some(city) = self.city {
            profile.city = city;
        }
    }
}
