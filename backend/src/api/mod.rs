//! Endpoints of the remote restaurant API.

mod restaurants;
pub use restaurants::list_restaurants;

mod reference_data;
pub use reference_data::{list_ambiences, list_cuisines, load_reference_data};

mod auth;
pub use auth::{login, signup};

mod reviews;
pub use reviews::add_review;
