//! Server-side client for the remote restaurant API.

pub mod api;
pub mod api_utils;
pub mod config;
pub mod error;
