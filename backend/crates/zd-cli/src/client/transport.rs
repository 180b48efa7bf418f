use crate::CliClientResult;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use zd_core::Context;

/// The HTTP capability resources are built on.
///
/// Paths are relative to the API base URL. Implementations JSON-encode the
/// request body, apply their own status policy and hand back the raw
/// response body for the caller to decode.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, ctx: &Context, path: &str) -> CliClientResult<Bytes>;

    async fn post(&self, ctx: &Context, path: &str, body: &Value) -> CliClientResult<Bytes>;

    async fn put(&self, ctx: &Context, path: &str, body: &Value) -> CliClientResult<Bytes>;

    async fn delete(&self, ctx: &Context, path: &str) -> CliClientResult<Bytes>;
}
