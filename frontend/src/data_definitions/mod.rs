pub mod session;
pub mod url_param;
