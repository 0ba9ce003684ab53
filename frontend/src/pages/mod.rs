pub mod add_review_page;
pub mod home_page;
pub mod login_page;
pub mod restaurants_page;
pub mod signup_page;
