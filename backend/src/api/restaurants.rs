//! Restaurant listing endpoint.

use common::{
    api_const::RESTAURANTS_PATH,
    filter_query::filter_query_pairs,
    filter_state::FilterState,
    restaurant::RestaurantListing,
    session::AuthToken,
};

use crate::{api_utils::api_client::RestaurantApiClient, error::ApiError};

/// One read of `GET /api/restaurants/` with only the set filters in the query.
pub async fn list_restaurants(
    client: &RestaurantApiClient,
    filters: &FilterState,
    auth: Option<&AuthToken>,
) -> Result<RestaurantListing, ApiError> {
    let query = filter_query_pairs(filters);
    let listing: RestaurantListing = client.get_json(RESTAURANTS_PATH, &query, auth).await?;
    tracing::info!("restaurant listing: {} results", listing.restaurants.len());
    Ok(listing)
}
