//! Thin `reqwest` wrapper that adds the headers the restaurant API expects.

use common::{
    api_const::{CSRF_COOKIE_NAME, CSRF_HEADER, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE},
    session::AuthToken,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::{config::ApiConfig, error::ApiError};

#[derive(Debug, Clone)]
pub struct RestaurantApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

/// Status and raw body of a write request, for the outcome parsers.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub fn get_api_client() -> anyhow::Result<RestaurantApiClient> {
    RestaurantApiClient::new(ApiConfig::from_env()?)
}

impl RestaurantApiClient {
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, config })
    }

    fn request(&self, method: reqwest::Method, path: &str, auth: Option<&AuthToken>) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .request(method, self.config.url(path))
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE);
        if let Some(token) = auth {
            request = request.header(reqwest::header::AUTHORIZATION, token.header_value());
        }
        request
    }

    /// GET and decode a JSON body. Any non-2xx status is an error.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        auth: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        info!("GET {path} ({} filter params)", query.len());
        let response = self.request(reqwest::Method::GET, path, auth).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("GET {path} failed with {status}");
            return Err(ApiError::http(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST a JSON body. Non-2xx statuses are returned, not raised, since rejections carry messages.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        auth: Option<&AuthToken>,
        csrf_token: Option<&str>,
    ) -> Result<RawResponse, ApiError> {
        info!("POST {path}");
        let mut request = self.request(reqwest::Method::POST, path, auth).json(body);
        if let Some(csrf_token) = csrf_token {
            // the double-submit check wants the cookie next to the header
            request = request
                .header(CSRF_HEADER, csrf_token)
                .header(reqwest::header::COOKIE, format!("{CSRF_COOKIE_NAME}={csrf_token}"));
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
