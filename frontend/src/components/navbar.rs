//! Top navigation bar shared by the signed-in pages.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdExitToApp, MdSearch};
use dioxus_free_icons::icons::md_editor_icons::MdModeEdit;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session::use_session;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-topbar",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 56px;
                    flex-shrink: 0;
                    padding: 0 20px;
                    background-color: #01579b;
                    color: white;
                ",

                div {
                    style: "font-size: 22px; font-weight: 500;",
                    "Restaurant Finder"
                }
                IconLink { to: Route::restaurants_page(None), icon: MdSearch, label: "Restaurants" }
                IconLink { to: Route::AddReviewPage {}, icon: MdModeEdit, label: "Add Review" }

                div { style: "flex-grow:1;" }
                LogoutButton {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn LogoutButton() -> Element {
    let mut session = use_session();
    rsx! {
        button {
            title: "Logout",
            style: "
                display:flex;
                align-items:center;
                gap: 6px;
                border: none;
                background: none;
                color: white;
                font-size: 16px;
                cursor: pointer;
            ",
            onclick: move |_| {
                session.sign_out();
                dioxus::logger::tracing::info!("signed out");
                navigator().replace(Route::LoginPage {});
            },
            Icon { icon: MdExitToApp, style: "width: 24px; height: 24px;" }
            "Logout"
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "display:flex; align-items:center; gap: 6px; color:white; font-size: 16px;",
                Icon { icon: icon, style: "width: 24px; height: 24px;" }
                "{label}"
            }
        }
    }
}
