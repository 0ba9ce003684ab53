//! Cuisine and ambience lookups.

use common::{
    api_const::{AMBIENCES_PATH, CUISINES_PATH},
    reference_data::{Ambience, Cuisine, ReferenceData},
};

use crate::{api_utils::api_client::RestaurantApiClient, error::ApiError};

pub async fn list_cuisines(client: &RestaurantApiClient) -> Result<Vec<Cuisine>, ApiError> {
    client.get_json(CUISINES_PATH, &[], None).await
}

pub async fn list_ambiences(client: &RestaurantApiClient) -> Result<Vec<Ambience>, ApiError> {
    client.get_json(AMBIENCES_PATH, &[], None).await
}

/// Both lists, fetched concurrently. A list that fails to load is left empty;
/// only when both fail is the error returned.
pub async fn load_reference_data(client: &RestaurantApiClient) -> Result<ReferenceData, ApiError> {
    match futures::join!(list_cuisines(client), list_ambiences(client)) {
        (Err(e), Err(ambience_err)) => {
            tracing::warn!("ambiences failed to load: {ambience_err}");
            Err(e)
        }
        (cuisines, ambiences) => Ok(ReferenceData {
            cuisines: cuisines.unwrap_or_else(|e| {
                tracing::warn!("cuisines failed to load: {e}");
                Vec::new()
            }),
            ambiences: ambiences.unwrap_or_else(|e| {
                tracing::warn!("ambiences failed to load: {e}");
                Vec::new()
            }),
        }),
    }
}
