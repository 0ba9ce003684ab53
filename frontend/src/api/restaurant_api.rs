//! Client API calls for restaurant listings and reference data.

use common::{
    filter_state::FilterState,
    reference_data::ReferenceData,
    restaurant::RestaurantListing,
    session::AuthToken,
};
use dioxus::prelude::*;

#[server]
pub async fn list_restaurants(filters: FilterState, token: Option<AuthToken>) -> Result<RestaurantListing, ServerFnError> {
    let client = super::api_client()?;
    let x = backend::api::list_restaurants(&client, &filters, token.as_ref()).await;
    x.map_err(super::to_server_error)
}

#[server]
pub async fn load_reference_data() -> Result<ReferenceData, ServerFnError> {
    let client = super::api_client()?;
    let x = backend::api::load_reference_data(&client).await;
    x.map_err(super::to_server_error)
}
