//! Result count, fetch status and the show/hide toggles.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdExpandLess, MdExpandMore};

use crate::pages::restaurants_page::RestaurantsPageState;

#[component]
pub fn ResultsHeader(show_filters: Signal<bool>, show_table: Signal<bool>, show_map: Signal<bool>) -> Element {
    rsx! {
        div {
            id: "x-results-header",
            style: "
                display:flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
                padding: 8px 0;
            ",
            ViewToggle { shown: show_filters, what: "Filters" }
            ViewToggle { shown: show_table, what: "Table" }
            ViewToggle { shown: show_map, what: "Map" }
            div { style: "flex-grow:1;" }
            FetchStatus {}
        }
    }
}

#[component]
fn ViewToggle(mut shown: Signal<bool>, what: String) -> Element {
    let verb = if shown() { "Hide" } else { "Show" };
    rsx! {
        button {
            style: "
                display:flex;
                align-items:center;
                gap: 4px;
                height: 32px;
                padding: 0 10px;
                border: 1px solid #0288d1;
                border-radius: 6px;
                background: white;
                color: #0288d1;
                cursor: pointer;
            ",
            onclick: move |_| shown.toggle(),
            if shown() {
                Icon { icon: MdExpandLess, style: "width: 18px; height: 18px;" }
            } else {
                Icon { icon: MdExpandMore, style: "width: 18px; height: 18px;" }
            }
            "{verb} {what}"
        }
    }
}

#[component]
fn FetchStatus() -> Element {
    let page = use_context::<RestaurantsPageState>();
    let results = page.results;
    let count = use_memo(move || results.read().count());
    let is_loading = use_memo(move || results.read().is_loading());
    let last_error = use_memo(move || results.read().last_error().map(|e| e.to_string()));

    rsx! {
        div {
            style: "display:flex; flex-direction: row; align-items: center; gap: 12px; font-size: 14px;",
            if is_loading() {
                span { style: "color:#01579b;", "Loading..." }
            }
            if let Some(error) = last_error() {
                span {
                    id: "x-fetch-error",
                    title: "{error}",
                    style: "
                        color:#92400E;
                        background: #FEF3C7;
                        border: 1px solid #FCD34D;
                        border-radius: 6px;
                        padding: 2px 8px;
                        max-width: 360px;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "Could not refresh results: {error}"
                }
            }
            span {
                style: "color:rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112);",
                "{count} restaurants"
            }
        }
    }
}
