//! Error handling for EventPass
//!
//! This module defines the main error types used throughout the client
//! and the normalization of backend error payloads into a typed shape.

use serde::Deserialize;
use thiserror::Error;

/// Main error type for the EventPass client
#[derive(Error, Debug)]
pub enum EventPassError {
    /// No token in the session store. Local precondition failure: the
    /// request is never sent.
    #[error("No session token found, log in first")]
    NoSession,

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EventPassError {
    /// Whether the backend rejected the stored session token
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            EventPassError::Api(ApiError {
                kind: ApiErrorKind::Unauthenticated,
                ..
            })
        )
    }
}

/// Classification of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Unauthenticated,
    Validation,
    NotFound,
    Network,
    Unknown,
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiErrorKind::Unauthenticated => write!(f, "unauthenticated"),
            ApiErrorKind::Validation => write!(f, "validation"),
            ApiErrorKind::NotFound => write!(f, "not found"),
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// A single failed backend request, normalized from the wire
///
/// The backend reports errors as `{"detail": string | [{"msg": ...}]}` with
/// a non-2xx status. The detail text is carried verbatim; array variants
/// are joined into one message for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

/// Error payload shape used by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Messages(Vec<DetailItem>),
}

#[derive(Debug, Deserialize)]
struct DetailItem {
    msg: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Transport failure: no usable response at all
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// Normalize a non-2xx response into a typed error
    ///
    /// The structured detail payload is surfaced verbatim when present;
    /// an unreadable body falls back to a generic `HTTP <status>` message.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let kind = Self::kind_for_status(status);
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => Self::new(kind, parsed.detail.into_message()),
            Err(_) => Self::new(kind, format!("HTTP {status}")),
        }
    }

    fn kind_for_status(status: u16) -> ApiErrorKind {
        match status {
            401 => ApiErrorKind::Unauthenticated,
            400 | 422 => ApiErrorKind::Validation,
            404 => ApiErrorKind::NotFound,
            _ => ApiErrorKind::Unknown,
        }
    }
}

impl Detail {
    fn into_message(self) -> String {
        match self {
            Detail::Message(msg) => msg,
            Detail::Messages(items) => items
                .into_iter()
                .map(|item| item.msg)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Result type alias for EventPass operations
pub type Result<T> = std::result::Result<T, EventPassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_surfaced_verbatim() {
        let body = br#"{"detail": "Incorrect username or password"}"#;
        let err = ApiError::from_response(401, body);
        assert_eq!(err.kind, ApiErrorKind::Unauthenticated);
        assert_eq!(err.message, "Incorrect username or password");
    }

    #[test]
    fn test_array_detail_joined() {
        let body = br#"{"detail": [{"msg": "field required"}, {"msg": "value is not a valid integer"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(err.message, "field required, value is not a valid integer");
    }

    #[test]
    fn test_validation_items_with_extra_fields() {
        // FastAPI validation items carry loc/type alongside msg
        let body = br#"{"detail": [{"loc": ["body", "date"], "msg": "bad date", "type": "value_error"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.message, "bad date");
    }

    #[test]
    fn test_unreadable_body_falls_back_to_status() {
        let err = ApiError::from_response(502, b"<html>bad gateway</html>");
        assert_eq!(err.kind, ApiErrorKind::Unknown);
        assert_eq!(err.message, "HTTP 502");
    }

    #[test]
    fn test_status_kind_mapping() {
        assert_eq!(ApiError::from_response(400, b"{}").kind, ApiErrorKind::Validation);
        assert_eq!(ApiError::from_response(404, b"{}").kind, ApiErrorKind::NotFound);
        assert_eq!(ApiError::from_response(403, b"{}").kind, ApiErrorKind::Unknown);
        assert_eq!(ApiError::from_response(500, b"{}").kind, ApiErrorKind::Unknown);
    }

    #[test]
    fn test_unauthenticated_detection() {
        let err: EventPassError =
            ApiError::new(ApiErrorKind::Unauthenticated, "Could not validate credentials").into();
        assert!(err.is_unauthenticated());
        assert!(!EventPassError::NoSession.is_unauthenticated());
    }
}
