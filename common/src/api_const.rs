//! Paths, header names and map defaults shared by client and server.

pub const RESTAURANTS_PATH: &str = "/api/restaurants/";
pub const CUISINES_PATH: &str = "/api/cuisines/";
pub const AMBIENCES_PATH: &str = "/api/ambiences/";
pub const LOGIN_PATH: &str = "/login/";
pub const SIGNUP_PATH: &str = "/signup/";
pub const ADD_REVIEW_PATH: &str = "/add_review/";

/// The listing endpoint only answers with JSON for XHR-style requests.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Local storage key holding the auth token.
pub const TOKEN_STORAGE_KEY: &str = "token";

pub const DEFAULT_MAP_CENTER: (f64, f64) = (0.0, 0.0);
pub const DEFAULT_MAP_ZOOM: u8 = 2;
pub const SELECTED_MAP_ZOOM: u8 = 10;
pub const SELECTED_MAP_TRANSITION_SECS: f64 = 0.5;

pub const MIN_REVIEW_RATING: f64 = 1.0;
pub const MAX_REVIEW_RATING: f64 = 5.0;
