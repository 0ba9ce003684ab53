//! Tabular view of the result set.

use chrono::{Datelike, Local};
use common::result_view::{RestaurantRow, table_rows};
use dioxus::prelude::*;

use crate::pages::restaurants_page::RestaurantsPageState;

const CELL_STYLE: &str = "padding: 8px; border-bottom: 1px solid #E1F5FE; text-align: left;";

#[component]
pub fn RestaurantTable() -> Element {
    let page = use_context::<RestaurantsPageState>();
    // today's hours follow the browser's local weekday
    let rows = use_memo(move || table_rows(&page.results.read(), Local::now().weekday()));

    rsx! {
        div {
            id: "x-restaurant-table",
            style: "display:flex; flex-direction: column; gap: 8px;",
            h2 { style: "margin: 0; color:#01579b;", "Restaurants" }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        style: "background-color: #B3E5FC;",
                        for title in ["Name", "Cuisine", "City", "Rating", "Price", "Today's Hours"] {
                            th { key: "{title}", style: CELL_STYLE, "{title}" }
                        }
                    }
                }
                tbody {
                    for row in rows() {
                        RestaurantRowView { key: "{row.key}", row }
                    }
                }
            }
        }
    }
}

#[component]
fn RestaurantRowView(row: RestaurantRow) -> Element {
    let page = use_context::<RestaurantsPageState>();
    let key = row.key;
    let background = if row.is_selected { "#E1F5FE" } else { "white" };
    rsx! {
        tr {
            style: "cursor: pointer; background-color: {background};",
            onclick: move |_| page.select_restaurant.call(key),
            td { style: CELL_STYLE, "{row.name}" }
            td { style: CELL_STYLE, "{row.cuisine}" }
            td { style: CELL_STYLE, "{row.city}" }
            td { style: CELL_STYLE, "{row.rating}" }
            td { style: CELL_STYLE, "{row.price_tier}" }
            td { style: CELL_STYLE, "{row.todays_hours}" }
        }
    }
}
