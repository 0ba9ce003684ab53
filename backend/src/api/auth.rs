//! Login and signup endpoints.

use common::{
    api_const::{LOGIN_PATH, SIGNUP_PATH},
    auth::{AuthOutcome, LoginRequest, SignupRequest},
};
use tracing::warn;

use crate::{api_utils::api_client::RestaurantApiClient, error::ApiError};

pub async fn login(client: &RestaurantApiClient, request: &LoginRequest) -> Result<AuthOutcome, ApiError> {
    let response = client.post_json(LOGIN_PATH, request, None, None).await?;
    let outcome = AuthOutcome::from_response(response.status, &response.body)?;
    if let AuthOutcome::Rejected { message } = &outcome {
        warn!("login rejected for {}: {}", request.username, message);
    }
    Ok(outcome)
}

pub async fn signup(client: &RestaurantApiClient, request: &SignupRequest) -> Result<AuthOutcome, ApiError> {
    let response = client.post_json(SIGNUP_PATH, request, None, None).await?;
    let outcome = AuthOutcome::from_response(response.status, &response.body)?;
    if let AuthOutcome::Rejected { message } = &outcome {
        warn!("signup rejected for {}: {}", request.username, message);
    }
    Ok(outcome)
}
