use common::auth::{AuthOutcome, SignupForm};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::api::auth_api::signup;
use crate::components::auth_form::{AuthCard, AuthInput, GENERIC_FORM_ERROR};
use crate::data_definitions::session::use_session;
use crate::routes::Route;

#[component]
pub fn SignupPage() -> Element {
    let mut session = use_session();
    let username = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |_: ()| {
        let form = SignupForm {
            username: username.read().clone(),
            email: email.read().clone(),
            password: password.read().clone(),
            confirm_password: confirm_password.read().clone(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        spawn(async move {
            match signup(request).await {
                Ok(AuthOutcome::SignedIn { token, username }) => {
                    info!("signed up as {username}");
                    session.sign_in(token);
                    navigator().replace(Route::restaurants_page(None));
                }
                Ok(AuthOutcome::Rejected { message }) => error.set(Some(message)),
                Err(e) => {
                    warn!("signup failed: {e}");
                    error.set(Some(GENERIC_FORM_ERROR.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        Title { "Restaurant Finder - Sign Up" }
        AuthCard {
            title: "Sign Up",
            submit_label: "Sign Up",
            error,
            busy,
            on_submit: submit,
            footer: rsx! {
                "Already have an account? "
                Link { to: Route::LoginPage {}, "Login" }
            },
            AuthInput { label: "Username", input_type: "text", value: username }
            AuthInput { label: "Email", input_type: "email", value: email }
            AuthInput { label: "Password", input_type: "password", value: password }
            AuthInput { label: "Confirm Password", input_type: "password", value: confirm_password }
        }
    }
}
