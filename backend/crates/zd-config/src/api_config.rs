use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_HOST_SUFFIX, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Connection settings for the Zendesk Support API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Account subdomain, e.g. "acme" for acme.zendesk.com
    pub subdomain: Option<String>,
    /// Full API base URL; takes precedence over `subdomain`
    pub base_url: Option<String>,
    /// Agent email used for API token authentication
    pub email: Option<String>,
    pub api_token: Option<String>,
    /// Default per-request timeout
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            subdomain: None,
            base_url: None,
            email: None,
            api_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl ApiConfig {
    /// Resolve the API base URL without a trailing slash.
    ///
    /// An explicit `base_url` wins; otherwise the URL is derived from the
    /// subdomain.
    #[track_caller]
    pub fn resolved_base_url(&self) -> ConfigErrorResult<String> {
        if let Some(base_url) = &self.base_url {
            return Ok(base_url.trim_end_matches('/').to_string());
        }

        match &self.subdomain {
            Some(subdomain) => Ok(format!(
                "https://{}.{}",
                subdomain, DEFAULT_API_HOST_SUFFIX
            )),
            None => Err(ConfigError::NoApiTarget),
        }
    }

    /// Username/password pair for HTTP basic auth, when credentials are set.
    ///
    /// API token auth uses `{email}/token` as the username.
    pub fn basic_auth(&self) -> Option<(String, String)> {
        match (&self.email, &self.api_token) {
            (Some(email), Some(token)) => Some((format!("{}/token", email), token.clone())),
            _ => None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(base_url) = &self.base_url {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(ConfigError::api(format!(
                    "api.base_url must start with http:// or https://, got {}",
                    base_url
                )));
            }
        } else if let Some(subdomain) = &self.subdomain {
            let valid = !subdomain.is_empty()
                && subdomain
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-');
            if !valid {
                return Err(ConfigError::api(format!(
                    "api.subdomain must be non-empty and contain only letters, digits or '-', got {:?}",
                    subdomain
                )));
            }
        } else {
            return Err(ConfigError::NoApiTarget);
        }

        if self.email.is_some() != self.api_token.is_some() {
            return Err(ConfigError::auth(
                "api.email and api.api_token must be set together",
            ));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
