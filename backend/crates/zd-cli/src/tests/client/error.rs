use crate::ClientError;

use reqwest::StatusCode;

#[test]
fn test_from_status_string_error_shape() {
    let body = br#"{"error":"RecordNotFound","description":"Not found"}"#;
    let err = ClientError::from_status(StatusCode::NOT_FOUND, body);

    match err {
        ClientError::Api {
            status,
            ref code,
            ref message,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "RecordNotFound");
            assert_eq!(message, "Not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_from_status_object_error_shape() {
    let body = br#"{"error":{"title":"Forbidden","message":"You do not have access"}}"#;
    let err = ClientError::from_status(StatusCode::FORBIDDEN, body);

    let text = err.to_string();
    assert!(text.contains("Forbidden"));
    assert!(text.contains("You do not have access"));
    assert_eq!(err.status(), Some(403));
}

#[test]
fn test_from_status_non_json_body() {
    let err = ClientError::from_status(StatusCode::BAD_GATEWAY, b"upstream unavailable");

    match err {
        ClientError::Api {
            ref code,
            ref message,
            ..
        } => {
            assert_eq!(code, "Bad Gateway");
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_from_status_empty_body() {
    let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, b"");
    assert!(err.to_string().contains("Unknown error"));
}

#[test]
fn test_classification() {
    let api = ClientError::from_status(StatusCode::NOT_FOUND, b"");
    assert!(api.is_transport());
    assert!(!api.is_decode());

    let json: ClientError = serde_json::from_slice::<serde_json::Value>(b"{\"identities\":")
        .unwrap_err()
        .into();
    assert!(json.is_decode());
    assert!(!json.is_transport());
    assert_eq!(json.status(), None);
}
