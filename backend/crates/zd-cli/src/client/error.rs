use error_location::ErrorLocation;
use reqwest::StatusCode;
use serde_json::Value;
use std::panic::Location;
use thiserror::Error;
use zd_config::ConfigError;

/// Errors that can occur during API calls
///
/// `Http` and `Api` are transport failures: the request did not complete or
/// the server refused it. `Json` means a response body did not match the
/// expected envelope. Neither kind is retried or recovered from here.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, code: String, message: String) -> Self {
        ClientError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build an API error from a non-success response.
    ///
    /// Understands both error body shapes the API returns:
    /// `{"error": "RecordNotFound", "description": "Not found"}` and
    /// `{"error": {"title": "Forbidden", "message": "..."}}`.
    #[track_caller]
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let fallback_code = status
            .canonical_reason()
            .unwrap_or("UNKNOWN")
            .to_string();

        let parsed: Option<Value> = serde_json::from_slice(body).ok();
        let error = parsed.as_ref().and_then(|v| v.get("error"));

        let (code, message) = match error {
            Some(Value::String(code)) => {
                let message = parsed
                    .as_ref()
                    .and_then(|v| v.get("description"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error");
                (code.clone(), message.to_string())
            }
            Some(Value::Object(error)) => {
                let code = error
                    .get("title")
                    .and_then(|v| v.as_str())
                    .unwrap_or(fallback_code.as_str())
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                (code, message)
            }
            _ => {
                let text = String::from_utf8_lossy(body);
                let message = if text.trim().is_empty() {
                    String::from("Unknown error")
                } else {
                    text.trim().to_string()
                };
                (fallback_code, message)
            }
        };

        ClientError::api_error(status.as_u16(), code, message)
    }

    /// The request did not complete or the server rejected it.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http { .. } | ClientError::Api { .. })
    }

    /// A response body did not decode into the expected envelope.
    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Json { .. })
    }

    /// HTTP status of a rejected request, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ConfigError> for ClientError {
    fn from(source: ConfigError) -> Self {
        ClientError::Config { source }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
