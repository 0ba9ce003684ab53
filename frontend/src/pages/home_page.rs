use dioxus::prelude::*;

use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::session::use_session;
use crate::routes::Route;

/// `/` forwards to the restaurant page or to the login form.
#[component]
pub fn HomePage() -> Element {
    let session = use_session();
    use_effect(move || {
        if !session.is_restored() {
            return;
        }
        if session.is_authenticated() {
            navigator().replace(Route::restaurants_page(None));
        } else {
            navigator().replace(Route::LoginPage {});
        }
    });
    rsx! {
        Title { "Restaurant Finder" }
        LoadingIndicator {}
    }
}
