use common::{
    review::{ReviewOutcome, ReviewRequest},
    session::AuthToken,
};
use dioxus::prelude::*;

#[server]
pub async fn add_review(
    request: ReviewRequest,
    token: Option<AuthToken>,
    csrf_token: Option<String>,
) -> Result<ReviewOutcome, ServerFnError> {
    let client = super::api_client()?;
    let x = backend::api::add_review(&client, &request, token.as_ref(), csrf_token.as_deref()).await;
    x.map_err(super::to_server_error)
}
