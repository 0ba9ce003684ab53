//! Login and signup payloads and outcomes.

use serde::{Deserialize, Serialize};

use crate::{
    api_message::{ApiMessageBody, UnexpectedResponse, is_client_error, is_success},
    session::AuthToken,
};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The signup form as typed, before the confirmation check.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, String> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH.to_string());
        }
        Ok(SignupRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AuthResponseBody {
    token: String,
    #[serde(default)]
    username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuthOutcome {
    SignedIn { token: AuthToken, username: String },
    /// Bad credentials, duplicate username or email.
    Rejected { message: String },
}

impl AuthOutcome {
    pub fn from_response(status: u16, body: &str) -> Result<Self, UnexpectedResponse> {
        if is_success(status) {
            let parsed: AuthResponseBody = serde_json::from_str(body).map_err(|_| UnexpectedResponse::new(status, body))?;
            let token = AuthToken::new(parsed.token).ok_or_else(|| UnexpectedResponse::new(status, body))?;
            return Ok(AuthOutcome::SignedIn { token, username: parsed.username });
        }
        if is_client_error(status) {
            if let Some(ApiMessageBody { error, message }) = ApiMessageBody::parse(body) {
                if let Some(message) = error.or(message) {
                    return Ok(AuthOutcome::Rejected { message });
                }
            }
        }
        Err(UnexpectedResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_are_rejected_before_sending() {
        let form = SignupForm {
            username: "ana".into(),
            email: "ana@example.com".into(),
            password: "hunter2".into(),
            confirm_password: "hunter3".into(),
        };
        assert_eq!(form.validate(), Err(PASSWORD_MISMATCH.to_string()));

        let form = SignupForm { confirm_password: "hunter2".into(), ..form };
        let request = form.validate().unwrap();
        assert_eq!(request.username, "ana");
        assert_eq!(request.password, "hunter2");
    }

    #[test]
    fn login_success_yields_token() {
        let outcome = AuthOutcome::from_response(200, r#"{"token": "abc", "username": "ana"}"#).unwrap();
        assert_eq!(
            outcome,
            AuthOutcome::SignedIn { token: AuthToken::new("abc").unwrap(), username: "ana".into() }
        );
    }

    #[test]
    fn signup_created_ignores_extra_fields() {
        let outcome = AuthOutcome::from_response(201, r#"{"token": "t", "username": "bo", "user_id": 17}"#).unwrap();
        assert!(matches!(outcome, AuthOutcome::SignedIn { .. }));
    }

    #[test]
    fn client_errors_with_message_are_rejections() {
        assert_eq!(
            AuthOutcome::from_response(401, r#"{"error": "Invalid credentials"}"#).unwrap(),
            AuthOutcome::Rejected { message: "Invalid credentials".into() }
        );
        assert_eq!(
            AuthOutcome::from_response(400, r#"{"error": "Username already exists"}"#).unwrap(),
            AuthOutcome::Rejected { message: "Username already exists".into() }
        );
    }

    #[test]
    fn other_responses_are_unexpected() {
        assert_eq!(AuthOutcome::from_response(500, "oops").unwrap_err().status, 500);
        assert!(AuthOutcome::from_response(400, "<html>").is_err());
        let err = AuthOutcome::from_response(200, "{}").unwrap_err();
        assert!(err.is_success_status());
    }
}
