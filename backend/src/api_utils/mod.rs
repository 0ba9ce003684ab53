//! HTTP plumbing shared by the API endpoints.

pub mod api_client;
