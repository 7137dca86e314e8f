//! Member type types

use serde::{Deserialize, Serialize};

/// The fixed set of member types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberTypeId {
    Basic,
    Business,
}

impl MemberTypeId {
    pub const ALL: [MemberTypeId; 2] = [MemberTypeId::Basic, MemberTypeId::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberTypeId::Basic => "basic",
            MemberTypeId::Business => "business",
        }
    }

    /// Default member type record seeded at startup
    pub fn default_member_type(self) -> MemberType {
        let (discount, month_posts_limit) = match self {
            MemberTypeId::Basic => (0.0, 20),
            MemberTypeId::Business => (5.0, 100),
        };
        MemberType {
            id: self.as_str().to_string(),
            discount,
            month_posts_limit,
        }
    }
}

impl std::fmt::Display for MemberTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Membership tier reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberType {
    pub id: String,
    pub discount: f64,
    pub month_posts_limit: u32,
}

/// Partial member type update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemberTypePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_posts_limit: Option<u32>,
}

impl MemberTypePatch {
    pub fn apply(self, member_type: &mut MemberType) {
        if let Some(discount) = self.discount {
            member_type.discount = discount;
        }
        if let Some(limit) = self.month_posts_limit {
            member_type.month_posts_limit = limit;
        }
    }
}
