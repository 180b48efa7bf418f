use crate::{CliClientResult, ClientError, Transport, UserIdentities, UserIdentityApi};

use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::{Value, json};
use zd_core::{Context, IdentityType, PageOptions, UserIdentity};

/// Records every call and answers with a canned response
struct RecordingTransport {
    response: Result<&'static str, StatusCode>,
    calls: Mutex<Vec<(&'static str, String, Option<Value>)>>,
}

impl RecordingTransport {
    fn replying(body: &'static str) -> Self {
        Self {
            response: Ok(body),
            calls: Mutex::new(vec![]),
        }
    }

    fn failing(status: StatusCode) -> Self {
        Self {
            response: Err(status),
            calls: Mutex::new(vec![]),
        }
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        body: Option<&Value>,
    ) -> CliClientResult<Bytes> {
        self.calls
            .lock()
            .unwrap()
            .push((method, path.to_string(), body.cloned()));

        match self.response {
            Ok(body) => Ok(Bytes::from_static(body.as_bytes())),
            Err(status) => Err(ClientError::from_status(status, b"")),
        }
    }

    fn only_call(&self) -> (&'static str, String, Option<Value>) {
        let calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        calls[0].clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, _ctx: &Context, path: &str) -> CliClientResult<Bytes> {
        self.record("GET", path, None)
    }

    async fn post(&self, _ctx: &Context, path: &str, body: &Value) -> CliClientResult<Bytes> {
        self.record("POST", path, Some(body))
    }

    async fn put(&self, _ctx: &Context, path: &str, body: &Value) -> CliClientResult<Bytes> {
        self.record("PUT", path, Some(body))
    }

    async fn delete(&self, _ctx: &Context, path: &str) -> CliClientResult<Bytes> {
        self.record("DELETE", path, None)
    }
}

#[tokio::test]
async fn test_list_path_and_decode() {
    let transport =
        RecordingTransport::replying(r#"{"identities":[{"id":1,"value":"a@b.com"}]}"#);
    let ctx = Context::background();

    let result = UserIdentities::new(&transport).list(&ctx, 42).await.unwrap();

    assert_eq!(
        result,
        vec![UserIdentity {
            id: 1,
            value: "a@b.com".to_string(),
            ..Default::default()
        }]
    );
    assert_eq!(
        transport.only_call(),
        ("GET", "/end_users/42/identities.json".to_string(), None)
    );
}

#[tokio::test]
async fn test_list_tolerates_null_fields() {
    let transport = RecordingTransport::replying(
        r#"{"identities":[{"id":1,"value":"a@b.com","deliverable_state":null,"url":null}]}"#,
    );
    let ctx = Context::background();

    let result = UserIdentities::new(&transport).list(&ctx, 42).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].deliverable_state, "");
    assert_eq!(result[0].url, "");
}

#[tokio::test]
async fn test_list_page_appends_query() {
    let transport = RecordingTransport::replying(
        r#"{"identities":[],"next_page":"https://acme.zendesk.com/api/v2/end_users/42/identities.json?page=3","previous_page":null,"count":101}"#,
    );
    let ctx = Context::background();
    let opts = PageOptions::new(Some(2), Some(50));

    let (identities, page) = UserIdentities::new(&transport)
        .list_page(&ctx, 42, &opts)
        .await
        .unwrap();

    assert!(identities.is_empty());
    assert!(page.has_next());
    assert_eq!(page.count, 101);
    assert_eq!(
        transport.only_call().1,
        "/end_users/42/identities.json?page=2&per_page=50"
    );
}

#[tokio::test]
async fn test_create_wraps_identity() {
    let transport = RecordingTransport::replying(
        r#"{"identity":{"id":9,"type":"email","value":"x@y.com","user_id":42}}"#,
    );
    let ctx = Context::background();

    let created = UserIdentities::new(&transport)
        .create(&ctx, 42, UserIdentity::new(IdentityType::Email, "x@y.com"))
        .await
        .unwrap();

    assert_eq!(created.id, 9);
    assert_eq!(created.user_id, 42);
    assert_eq!(
        transport.only_call(),
        (
            "POST",
            "/end_users/42/identities.json".to_string(),
            Some(json!({"identity": {"type": "email", "value": "x@y.com"}}))
        )
    );
}

#[tokio::test]
async fn test_make_primary_sends_placeholder_and_returns_empty() {
    let transport = RecordingTransport::replying(
        r#"{"identities":[{"id":7,"primary":true},{"id":8,"primary":false}]}"#,
    );
    let ctx = Context::background();

    let result = UserIdentities::new(&transport)
        .make_primary(&ctx, 42, 7)
        .await
        .unwrap();

    // Response body is not decoded
    assert!(result.is_empty());
    assert_eq!(
        transport.only_call(),
        (
            "PUT",
            "/end_users/42/identities/7/make_primary".to_string(),
            Some(json!({"identities": []}))
        )
    );
}

#[tokio::test]
async fn test_verify_targets_users_path_and_returns_default() {
    let transport =
        RecordingTransport::replying(r#"{"identity":{"id":7,"verified":true}}"#);
    let ctx = Context::background();

    let result = UserIdentities::new(&transport)
        .verify(&ctx, 42, 7)
        .await
        .unwrap();

    assert_eq!(result, UserIdentity::default());
    let (method, path, body) = transport.only_call();
    assert_eq!(method, "PUT");
    assert_eq!(path, "/users/42/identities/7/verify");
    assert!(!path.starts_with("/end_users"));
    assert_eq!(body, Some(json!({"identity": {}})));
}

#[tokio::test]
async fn test_delete_ignores_body() {
    let transport = RecordingTransport::replying("not json at all");
    let ctx = Context::background();

    let result = UserIdentities::new(&transport).delete(&ctx, 42, 7).await;

    assert!(result.is_ok());
    assert_eq!(
        transport.only_call(),
        ("DELETE", "/end_users/42/identities/7".to_string(), None)
    );
}

#[tokio::test]
async fn test_ids_are_passed_through_uninterpreted() {
    let transport = RecordingTransport::replying("");
    let ctx = Context::background();

    UserIdentities::new(&transport)
        .delete(&ctx, 0, -3)
        .await
        .unwrap();

    assert_eq!(transport.only_call().1, "/end_users/0/identities/-3");
}

#[tokio::test]
async fn test_truncated_list_body_is_decode_error() {
    let transport = RecordingTransport::replying(r#"{"identities":[{"id":1,"#);
    let ctx = Context::background();

    let err = UserIdentities::new(&transport)
        .list(&ctx, 42)
        .await
        .unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn test_schema_mismatch_on_create_is_decode_error() {
    let transport = RecordingTransport::replying(r#"{"identity":{"id":"nine"}}"#);
    let ctx = Context::background();

    let err = UserIdentities::new(&transport)
        .create(&ctx, 42, UserIdentity::new(IdentityType::Email, "x@y.com"))
        .await
        .unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn test_transport_error_propagates_unchanged() {
    let transport = RecordingTransport::failing(StatusCode::NOT_FOUND);
    let ctx = Context::background();
    let identities = UserIdentities::new(&transport);

    let err = identities.make_primary(&ctx, 42, 7).await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), Some(404));

    let err = identities.verify(&ctx, 42, 7).await.unwrap_err();
    assert!(err.is_transport());
}
