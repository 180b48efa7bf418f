use crate::{BasicAuth, Client};

use zd_config::ApiConfig;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("https://acme.zendesk.com/api/v2/", None);
    assert_eq!(client.base_url, "https://acme.zendesk.com/api/v2");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("https://acme.zendesk.com/api/v2", None);
    assert_eq!(client.base_url, "https://acme.zendesk.com/api/v2");
}

#[test]
fn test_api_token_auth_username() {
    let auth = BasicAuth::api_token("agent@acme.com", "secret");
    assert_eq!(auth.username, "agent@acme.com/token");
    assert_eq!(auth.password, "secret");
}

#[test]
fn test_auth_none() {
    let client = Client::new("https://acme.zendesk.com/api/v2", None);
    assert!(client.auth.is_none());
}

#[test]
fn test_from_config_uses_subdomain_and_credentials() {
    let config = ApiConfig {
        subdomain: Some("acme".to_string()),
        email: Some("agent@acme.com".to_string()),
        api_token: Some("secret".to_string()),
        ..Default::default()
    };

    let client = Client::from_config(&config).unwrap();

    assert_eq!(client.base_url, "https://acme.zendesk.com/api/v2");
    assert_eq!(
        client.auth,
        Some(BasicAuth::api_token("agent@acme.com", "secret"))
    );
}

#[test]
fn test_from_config_without_target_fails() {
    let result = Client::from_config(&ApiConfig::default());
    assert!(result.is_err());
}
