use common::auth::{AuthOutcome, LoginRequest};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::api::auth_api::login;
use crate::components::auth_form::{AuthCard, AuthInput, GENERIC_FORM_ERROR};
use crate::data_definitions::session::use_session;
use crate::routes::Route;

#[component]
pub fn LoginPage() -> Element {
    let mut session = use_session();
    let username = use_signal(String::new);
    let password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |_: ()| {
        let request = LoginRequest { username: username.read().clone(), password: password.read().clone() };
        busy.set(true);
        error.set(None);
        spawn(async move {
            match login(request).await {
                Ok(AuthOutcome::SignedIn { token, username }) => {
                    info!("signed in as {username}");
                    session.sign_in(token);
                    navigator().replace(Route::restaurants_page(None));
                }
                Ok(AuthOutcome::Rejected { message }) => error.set(Some(message)),
                Err(e) => {
                    warn!("login failed: {e}");
                    error.set(Some(GENERIC_FORM_ERROR.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        Title { "Restaurant Finder - Login" }
        AuthCard {
            title: "Login",
            submit_label: "Login",
            error,
            busy,
            on_submit: submit,
            footer: rsx! {
                "Don't have an account? "
                Link { to: Route::SignupPage {}, "Sign up" }
            },
            AuthInput { label: "Username", input_type: "text", value: username }
            AuthInput { label: "Password", input_type: "password", value: password }
        }
    }
}
