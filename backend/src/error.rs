//! Failures talking to the restaurant API.

use common::api_message::UnexpectedResponse;
use thiserror::Error;

const MAX_BODY_IN_ERROR: usize = 300;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to restaurant API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("restaurant API returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("could not decode restaurant API response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn http(status: u16, body: &str) -> Self {
        ApiError::Http { status, body: truncate(body) }
    }

    /// Status code to report across the server function boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Http { status, .. } => *status,
            ApiError::Transport(_) | ApiError::Decode(_) => 500,
        }
    }
}

impl From<UnexpectedResponse> for ApiError {
    fn from(response: UnexpectedResponse) -> Self {
        if response.is_success_status() {
            ApiError::Decode(truncate(&response.body))
        } else {
            ApiError::http(response.status, &response.body)
        }
    }
}

fn truncate(body: &str) -> String {
    match body.char_indices().nth(MAX_BODY_IN_ERROR) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
