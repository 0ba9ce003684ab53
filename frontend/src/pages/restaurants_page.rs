use common::{
    filter_state::FilterState,
    reference_data::ReferenceData,
    restaurant::RestaurantKey,
    restaurant_results::{FetchOutcome, RestaurantResults},
    session::PageState,
};
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;

use crate::{
    api::restaurant_api::{list_restaurants, load_reference_data},
    components::{
        error_boundary::ComponentErrorBoundary,
        require_session::RequireSession,
        restaurant_components::{
            filter_sidebar::FilterSidebar, restaurant_map::RestaurantMap, restaurant_table::RestaurantTable,
            results_header::ResultsHeader,
        },
    },
    data_definitions::{session::use_session, url_param::UrlParam},
    routes::Route,
};

/// Shared with the sidebar, table, map and header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestaurantsPageState {
    /// Filters from the URL; `None` until the user applies some.
    pub applied_filters: ReadSignal<Option<FilterState>>,
    pub results: ReadSignal<RestaurantResults>,
    pub reference: ReadSignal<ReferenceData>,
    pub apply_filters: Callback<FilterState>,
    pub select_restaurant: Callback<RestaurantKey>,
}

#[component]
pub fn RestaurantsPage(filters: UrlParam<Option<FilterState>>) -> Element {
    rsx! {
        Title { "Restaurant Finder" }
        RequireSession {
            RestaurantsPageRoot { applied_filters: filters.0.clone() }
        }
    }
}

#[component]
fn RestaurantsPageRoot(applied_filters: ReadSignal<Option<FilterState>>) -> Element {
    let session = use_session();
    let mut results = use_signal(RestaurantResults::default);

    let fetch = use_callback(move |filters: FilterState| {
        let ticket = results.write().begin_fetch();
        let token = session.peek_token();
        spawn(async move {
            let response = list_restaurants(filters, token).await;
            match results.write().complete(ticket, response) {
                FetchOutcome::Applied { count } => info!("fetch {} applied: {count} restaurants", ticket.sequence()),
                FetchOutcome::Failed { message } => error!("fetch {} failed, keeping previous results: {message}", ticket.sequence()),
                FetchOutcome::Stale => info!("fetch {} superseded, response dropped", ticket.sequence()),
            }
        });
    });

    // the route segment is the source of truth for applied filters
    use_effect(move || {
        if let Some(filters) = applied_filters.read().clone() {
            fetch.call(filters);
        }
    });

    let fetched_reference = use_resource(|| async move {
        match load_reference_data().await {
            Ok(data) => data,
            Err(e) => {
                warn!("cuisine/ambience lists unavailable: {e}");
                ReferenceData::default()
            }
        }
    });
    let reference = use_memo(move || {
        let fetched = fetched_reference.read().clone().unwrap_or_default();
        fetched.merged_with(results.read().listing_reference())
    });

    use_context_provider(move || RestaurantsPageState {
        applied_filters,
        results: results.into(),
        reference: reference.into(),
        apply_filters: Callback::new(move |filters: FilterState| {
            if applied_filters.read().as_ref() == Some(&filters) {
                // same URL, so no navigation will trigger the fetch
                fetch.call(filters);
            } else {
                navigator().push(Route::restaurants_page(Some(filters)));
            }
        }),
        select_restaurant: Callback::new(move |key: RestaurantKey| {
            if !results.write().select(key) {
                warn!("ignored selection of unknown restaurant {key}");
            }
        }),
    });

    let show_filters = use_signal(|| true);
    let show_table = use_signal(|| true);
    let show_map = use_signal(|| true);
    let page_state = use_memo(move || PageState::resolve(session.is_authenticated(), applied_filters.read().is_some()));

    rsx! {
        div {
            id: "x-restaurants-page-root",
            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",
            if show_filters() {
                div {
                    id: "x-restaurants-left-panel",
                    style: "
                        width: 280px;
                        flex-shrink: 0;
                        height: 100%;
                        overflow-y: auto;
                        background-color: #E1F5FE;
                        border-right: 1px solid #B3E5FC;
                    ",
                    ComponentErrorBoundary { FilterSidebar {} }
                }
            }
            div {
                id: "x-restaurants-main",
                style: "
                    flex-grow: 1;
                    min-width: 300px;
                    height: 100%;
                    overflow-y: auto;
                    padding: 0 16px 16px 16px;
                    box-sizing: border-box;
                ",
                ResultsHeader { show_filters, show_table, show_map }
                match page_state() {
                    PageState::Authenticated { filters_applied: true } => rsx! {
                        div {
                            style: "display:flex; flex-direction: column; gap: 24px;",
                            if show_table() {
                                ComponentErrorBoundary { RestaurantTable {} }
                            }
                            if show_map() {
                                ComponentErrorBoundary { RestaurantMap {} }
                            }
                        }
                    },
                    PageState::Authenticated { filters_applied: false } => rsx! {
                        div {
                            style: "color:#374151; font-size: 18px; padding: 24px 0;",
                            "Choose some filters and press Apply Filters to see restaurants."
                        }
                    },
                    PageState::Unauthenticated => rsx! {},
                }
            }
        }
    }
}
