use dioxus::prelude::*;

use common::filter_state::FilterState;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::add_review_page::AddReviewPage;
use crate::pages::home_page::HomePage;
use crate::pages::login_page::LoginPage;
use crate::pages::restaurants_page::RestaurantsPage;
use crate::pages::signup_page::SignupPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HomePage {},

    #[route("/login")]
    LoginPage {},

    #[route("/signup")]
    SignupPage {},


    #[layout(Navbar)]

    /// `None` until the user applies filters for the first time.
    #[route("/restaurants/:filters")]
    RestaurantsPage { filters: UrlParam<Option<FilterState>> },

    #[route("/add_review")]
    AddReviewPage {},
}

impl Route {
    pub fn restaurants_page(filters: Option<FilterState>) -> Self {
        Self::RestaurantsPage { filters: UrlParam::from(filters) }
    }
}
