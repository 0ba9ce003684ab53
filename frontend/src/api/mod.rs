//! Server functions over the remote restaurant API.

pub mod auth_api;
pub mod restaurant_api;
pub mod review_api;

#[cfg(feature = "server")]
fn to_server_error(error: backend::error::ApiError) -> dioxus::prelude::ServerFnError {
    dioxus::logger::tracing::error!("{error}");
    dioxus::prelude::ServerFnError::ServerError {
        message: error.to_string(),
        code: error.status_code(),
        details: None,
    }
}

#[cfg(feature = "server")]
fn api_client() -> Result<backend::api_utils::api_client::RestaurantApiClient, dioxus::prelude::ServerFnError> {
    backend::api_utils::api_client::get_api_client()
        .map_err(|e| dioxus::prelude::ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}
