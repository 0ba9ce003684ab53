//! Error/message bodies returned by the restaurant API on write endpoints.

use serde::{Deserialize, Serialize};

/// `{"error": ...}` or `{"message": ...}`, as sent by the API on rejections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMessageBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiMessageBody {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// A response that is neither a success nor a recognised rejection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unexpected response {status}: {body}")]
pub struct UnexpectedResponse {
    pub status: u16,
    pub body: String,
}

impl UnexpectedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

pub(crate) fn is_client_error(status: u16) -> bool {
    (400..500).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_response_is_an_error() {
        let err: Box<dyn std::error::Error> = Box::new(UnexpectedResponse::new(502, "bad gateway"));
        assert_eq!(err.to_string(), "unexpected response 502: bad gateway");
        assert!(err.source().is_none());
    }

    #[test]
    fn message_body_parses_either_key() {
        let body = ApiMessageBody::parse(r#"{"error": "Invalid credentials"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(body.message, None);
        assert!(ApiMessageBody::parse("<html>").is_none());
    }
}
