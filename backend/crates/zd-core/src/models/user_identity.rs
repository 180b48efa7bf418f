use crate::models::null_as_default;
use crate::{CoreResult, IdentityType};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A contact method attached to a user account: an email address, a phone
/// number or a social login.
///
/// Every field is optional on the wire. Absent or `null` fields decode to
/// their zero value and zero-valued fields are left out when encoding, so a
/// payload built with [`UserIdentity::new`] only carries `type` and `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserIdentity {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(
        rename = "type",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub primary: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub verified: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub deliverable_state: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub undeliverable_count: i64,

    // Server-maintained
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub user_id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl UserIdentity {
    /// Build a payload for creating a new identity.
    pub fn new(kind: IdentityType, value: impl Into<String>) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Parse the raw `type` field into a known identity kind.
    #[track_caller]
    pub fn identity_type(&self) -> CoreResult<IdentityType> {
        IdentityType::from_str(&self.kind)
    }
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}
