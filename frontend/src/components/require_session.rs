//! Gate for pages that need a signed-in user.

use dioxus::prelude::*;

use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::session::use_session;
use crate::routes::Route;

/// Sends the user to the login page when no token was found in storage.
#[component]
pub fn RequireSession(children: Element) -> Element {
    let session = use_session();
    use_effect(move || {
        if session.is_restored() && !session.is_authenticated() {
            navigator().replace(Route::LoginPage {});
        }
    });

    if !session.is_restored() || !session.is_authenticated() {
        return rsx! { LoadingIndicator {} };
    }
    rsx! { {children} }
}
