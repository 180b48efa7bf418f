use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity kinds the API documents. [`crate::UserIdentity`] keeps the raw
/// string so kinds added server-side still decode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdentityType {
    Email,
    Twitter,
    Facebook,
    Google,
    PhoneNumber,
    AgentForwarding,
    Sdk,
}

impl IdentityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Google => "google",
            Self::PhoneNumber => "phone_number",
            Self::AgentForwarding => "agent_forwarding",
            Self::Sdk => "sdk",
        }
    }
}

impl fmt::Display for IdentityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentityType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "email" => Ok(Self::Email),
            "twitter" => Ok(Self::Twitter),
            "facebook" => Ok(Self::Facebook),
            "google" => Ok(Self::Google),
            "phone_number" => Ok(Self::PhoneNumber),
            "agent_forwarding" => Ok(Self::AgentForwarding),
            "sdk" => Ok(Self::Sdk),
            _ => Err(CoreError::InvalidIdentityType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
