//! Client API calls for login and signup.

use common::auth::{AuthOutcome, LoginRequest, SignupRequest};
use dioxus::prelude::*;

#[server]
pub async fn login(request: LoginRequest) -> Result<AuthOutcome, ServerFnError> {
    let client = super::api_client()?;
    let x = backend::api::login(&client, &request).await;
    x.map_err(super::to_server_error)
}

#[server]
pub async fn signup(request: SignupRequest) -> Result<AuthOutcome, ServerFnError> {
    let client = super::api_client()?;
    let x = backend::api::signup(&client, &request).await;
    x.map_err(super::to_server_error)
}
