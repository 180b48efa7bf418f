//! Single-key wrappers around request and response payloads.

use crate::UserIdentity;
use crate::models::null_as_default;

use serde::{Deserialize, Serialize};

/// `{"identity": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    pub identity: UserIdentity,
}

impl IdentityEnvelope {
    pub fn new(identity: UserIdentity) -> Self {
        Self { identity }
    }
}

/// `{"identities": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentitiesEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    pub identities: Vec<UserIdentity>,
}
