pub mod auth_form;
pub mod error_boundary;
pub mod navbar;
pub mod require_session;
pub mod restaurant_components;
pub mod suspend_boundary;
