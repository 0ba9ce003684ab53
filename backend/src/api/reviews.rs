//! Review submission endpoint.

use common::{
    api_const::ADD_REVIEW_PATH,
    review::{ReviewOutcome, ReviewRequest},
    session::AuthToken,
};

use crate::{api_utils::api_client::RestaurantApiClient, error::ApiError};

pub async fn add_review(
    client: &RestaurantApiClient,
    request: &ReviewRequest,
    auth: Option<&AuthToken>,
    csrf_token: Option<&str>,
) -> Result<ReviewOutcome, ApiError> {
    let response = client.post_json(ADD_REVIEW_PATH, request, auth, csrf_token).await?;
    let outcome = ReviewOutcome::from_response(response.status, &response.body)?;
    if let ReviewOutcome::Rejected { reason, message } = &outcome {
        tracing::warn!("review for {} rejected ({reason:?}): {message}", request.restaurant_name);
    }
    Ok(outcome)
}
