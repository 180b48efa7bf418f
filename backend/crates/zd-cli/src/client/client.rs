use crate::{CliClientResult, ClientError, Transport, UserIdentities};

use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use zd_config::ApiConfig;
use zd_core::Context;

/// Credentials sent as HTTP basic auth on every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    /// API token authentication: `{email}/token` with the token as password.
    pub fn api_token(email: &str, token: &str) -> Self {
        Self {
            username: format!("{}/token", email),
            password: token.to_string(),
        }
    }
}

/// HTTP client for the Zendesk Support REST API
pub struct Client {
    pub base_url: String,
    pub auth: Option<BasicAuth>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://acme.zendesk.com/api/v2")
    /// * `auth` - Optional basic auth credentials
    pub fn new(base_url: &str, auth: Option<BasicAuth>) -> Self {
        Self::with_http_client(base_url, auth, ReqwestClient::new())
    }

    fn with_http_client(base_url: &str, auth: Option<BasicAuth>, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            client,
        }
    }

    /// Create a client from validated API settings, applying the configured
    /// default timeout and user agent.
    pub fn from_config(config: &ApiConfig) -> CliClientResult<Self> {
        let base_url = config.resolved_base_url()?;
        let auth = config
            .basic_auth()
            .map(|(username, password)| BasicAuth { username, password });

        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::with_http_client(&base_url, auth, client))
    }

    /// User identities resource bound to this client
    pub fn user_identities(&self) -> UserIdentities<'_, Self> {
        UserIdentities::new(self)
    }

    /// Build a request with auth and the caller's deadline applied
    fn request(&self, method: Method, ctx: &Context, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref auth) = self.auth {
            req = req.basic_auth(&auth.username, Some(&auth.password));
        }

        if let Some(timeout) = ctx.timeout() {
            req = req.timeout(timeout);
        }

        req
    }

    /// Execute request and handle errors
    async fn execute(
        &self,
        method: Method,
        ctx: &Context,
        path: &str,
        body: Option<&Value>,
    ) -> CliClientResult<Bytes> {
        let mut req = self.request(method.clone(), ctx, path);
        if let Some(body) = body {
            req = req.json(body);
        }

        debug!("{} {}", method, path);
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!("{} {} -> {} ({} bytes)", method, path, status, bytes.len());

        if !status.is_success() {
            warn!("{} {} failed with status {}", method, path, status);
            return Err(ClientError::from_status(status, &bytes));
        }

        Ok(bytes)
    }
}

#[async_trait]
impl Transport for Client {
    async fn get(&self, ctx: &Context, path: &str) -> CliClientResult<Bytes> {
        self.execute(Method::GET, ctx, path, None).await
    }

    async fn post(&self, ctx: &Context, path: &str, body: &Value) -> CliClientResult<Bytes> {
        self.execute(Method::POST, ctx, path, Some(body)).await
    }

    async fn put(&self, ctx: &Context, path: &str, body: &Value) -> CliClientResult<Bytes> {
        self.execute(Method::PUT, ctx, path, Some(body)).await
    }

    async fn delete(&self, ctx: &Context, path: &str) -> CliClientResult<Bytes> {
        self.execute(Method::DELETE, ctx, path, None).await
    }
}
