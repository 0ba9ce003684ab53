//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod api_const;
pub mod api_message;
pub mod restaurant;
pub mod reference_data;
pub mod filter_state;
pub mod filter_query;
pub mod restaurant_results;
pub mod result_view;
pub mod session;
pub mod auth;
pub mod review;
