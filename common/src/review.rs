//! Review submission payload and outcome.

use serde::{Deserialize, Serialize};

use crate::{
    api_const::MIN_REVIEW_RATING,
    api_message::{ApiMessageBody, UnexpectedResponse, is_client_error, is_success},
};

const DEFAULT_ACCEPTED_MESSAGE: &str = "Review submitted successfully!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub restaurant_name: String,
    pub rating: f64,
    pub text: String,
}

impl ReviewRequest {
    pub fn new(restaurant_name: impl Into<String>) -> Self {
        Self { restaurant_name: restaurant_name.into(), rating: MIN_REVIEW_RATING, text: String::new() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewRejection {
    /// The content filter flagged the text as machine-written.
    AiGenerated,
    /// e.g. the restaurant does not exist.
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReviewOutcome {
    Accepted { message: String },
    Rejected { reason: ReviewRejection, message: String },
}

impl ReviewOutcome {
    /// A 4xx with `message` and no `error` is the content filter's rejection.
    pub fn from_response(status: u16, body: &str) -> Result<Self, UnexpectedResponse> {
        if is_success(status) {
            let message = ApiMessageBody::parse(body)
                .and_then(|b| b.message)
                .unwrap_or_else(|| DEFAULT_ACCEPTED_MESSAGE.to_string());
            return Ok(ReviewOutcome::Accepted { message });
        }
        if is_client_error(status) {
            match ApiMessageBody::parse(body) {
                Some(ApiMessageBody { error: Some(message), .. }) => {
                    return Ok(ReviewOutcome::Rejected { reason: ReviewRejection::Invalid, message });
                }
                Some(ApiMessageBody { error: None, message: Some(message) }) => {
                    return Ok(ReviewOutcome::Rejected { reason: ReviewRejection::AiGenerated, message });
                }
                _ => {}
            }
        }
        Err(UnexpectedResponse::new(status, body))
    }

    pub fn message(&self) -> &str {
        match self {
            ReviewOutcome::Accepted { message } | ReviewOutcome::Rejected { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_is_accepted_with_server_message() {
        let outcome = ReviewOutcome::from_response(201, r#"{"message": "Thank you for your review!"}"#).unwrap();
        assert_eq!(outcome, ReviewOutcome::Accepted { message: "Thank you for your review!".into() });
    }

    #[test]
    fn success_without_body_uses_default_message() {
        let outcome = ReviewOutcome::from_response(200, "").unwrap();
        assert_eq!(outcome.message(), DEFAULT_ACCEPTED_MESSAGE);
    }

    #[test]
    fn message_only_rejection_is_ai_flag() {
        let body = r#"{"message": "Your review appears to be AI-generated. Please revise it and try again."}"#;
        let outcome = ReviewOutcome::from_response(400, body).unwrap();
        assert!(matches!(outcome, ReviewOutcome::Rejected { reason: ReviewRejection::AiGenerated, .. }));
    }

    #[test]
    fn error_rejection_is_invalid_review() {
        let outcome = ReviewOutcome::from_response(400, r#"{"error": "Restaurant 'Nope' does not exist."}"#).unwrap();
        assert_eq!(
            outcome,
            ReviewOutcome::Rejected { reason: ReviewRejection::Invalid, message: "Restaurant 'Nope' does not exist.".into() }
        );
    }

    #[test]
    fn server_errors_are_unexpected() {
        assert!(ReviewOutcome::from_response(502, "bad gateway").is_err());
        assert!(ReviewOutcome::from_response(405, r#"{"x": 1}"#).is_err());
    }

    #[test]
    fn new_request_starts_at_minimum_rating() {
        let request = ReviewRequest::new("Roma");
        assert_eq!(request.rating, MIN_REVIEW_RATING);
        assert!(request.text.is_empty());
    }
}
