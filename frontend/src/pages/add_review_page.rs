use std::time::Duration;

use common::{
    api_const::{MAX_REVIEW_RATING, MIN_REVIEW_RATING},
    filter_state::FilterState,
    restaurant::{Restaurant, filter_by_name},
    review::{ReviewOutcome, ReviewRequest},
};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::{
    api::{restaurant_api::list_restaurants, review_api::add_review},
    components::{
        auth_form::GENERIC_FORM_ERROR,
        error_boundary::ComponentErrorDisplay,
        require_session::RequireSession,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::session::{read_csrf_cookie, use_session},
};

const ACCEPTED_MESSAGE_SECS: u64 = 6;

#[component]
pub fn AddReviewPage() -> Element {
    rsx! {
        Title { "Restaurant Finder - Add Review" }
        RequireSession {
            div {
                id: "x-add-review-page",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 16px;
                    padding: 24px;
                    max-width: 760px;
                ",
                h1 { style: "margin: 0; color:#01579b; font-size: 28px;", "Add a Review" }
                SuspendWrapper { RestaurantPicker {} }
            }
        }
    }
}

#[component]
fn RestaurantPicker() -> Element {
    let session = use_session();
    let mut search = use_signal(String::new);
    let mut chosen = use_signal(|| None::<String>);
    let listing = use_resource(move || async move {
        list_restaurants(FilterState::default(), session.peek_token()).await
    })
    .suspend()?
    .cloned();
    let restaurants = match listing {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{e}") } },
        Ok(listing) => listing.restaurants,
    };

    let matches: Vec<Restaurant> = filter_by_name(&restaurants, &search.read()).into_iter().cloned().collect();

    rsx! {
        input {
            r#type: "text",
            placeholder: "Search restaurants by name",
            style: "height: 34px; padding: 0 10px; border: 1px solid #B3E5FC; border-radius: 6px; font-size: 15px;",
            value: "{search}",
            oninput: move |e| search.set(e.value()),
        }
        ul {
            id: "x-review-restaurant-list",
            style: "list-style: none; margin: 0; padding: 0; max-height: 260px; overflow-y: auto; border: 1px solid #E1F5FE; border-radius: 6px;",
            for (position, restaurant) in matches.into_iter().enumerate() {
                li {
                    key: "{restaurant.key(position)}",
                    style: "padding: 8px 10px; cursor: pointer; border-bottom: 1px solid #E1F5FE;",
                    onclick: {
                        let name = restaurant.name.clone();
                        move |_| chosen.set(Some(name.clone()))
                    },
                    strong { "{restaurant.name}" }
                    span { style: "color:#6B7280;", " - {restaurant.city}" }
                }
            }
        }
        if let Some(name) = chosen() {
            ReviewForm { key: "{name}", restaurant_name: name }
        }
    }
}

#[component]
fn ReviewForm(restaurant_name: ReadSignal<String>) -> Element {
    let session = use_session();
    let mut request = use_signal(|| ReviewRequest::new(restaurant_name.read().clone()));
    let mut rating_input = use_signal(|| MIN_REVIEW_RATING.to_string());
    let mut outcome = use_signal(|| None::<ReviewOutcome>);
    let mut failure = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }
        let payload = request.read().clone();
        busy.set(true);
        outcome.set(None);
        failure.set(None);
        spawn(async move {
            match add_review(payload, session.peek_token(), read_csrf_cookie()).await {
                Ok(result) => {
                    if let ReviewOutcome::Accepted { .. } = &result {
                        info!("review for {} accepted", restaurant_name.read());
                        request.set(ReviewRequest::new(restaurant_name.read().clone()));
                        rating_input.set(MIN_REVIEW_RATING.to_string());
                        outcome.set(Some(result));
                        busy.set(false);
                        gloo_timers::future::sleep(Duration::from_secs(ACCEPTED_MESSAGE_SECS)).await;
                        if matches!(outcome.peek().as_ref(), Some(ReviewOutcome::Accepted { .. })) {
                            outcome.set(None);
                        }
                        return;
                    }
                    outcome.set(Some(result));
                }
                Err(e) => {
                    warn!("review submission failed: {e}");
                    failure.set(Some(GENERIC_FORM_ERROR.to_string()));
                }
            }
            busy.set(false);
        });
    };

    let message_color = match outcome.read().as_ref() {
        Some(ReviewOutcome::Accepted { .. }) => "#166534",
        _ => "#B91C1C",
    };

    rsx! {
        form {
            id: "x-review-form",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                padding: 20px;
                border-radius: 12px;
                background: white;
                border: 1px solid #B3E5FC;
            ",
            onsubmit: submit,

            h2 { style: "margin: 0; color:#01579b;", "Review {restaurant_name}" }
            label {
                style: "display:flex; flex-direction: column; gap: 4px; font-size: 14px;",
                "Rating:"
                input {
                    r#type: "number",
                    min: "{MIN_REVIEW_RATING}",
                    max: "{MAX_REVIEW_RATING}",
                    step: "0.5",
                    required: true,
                    style: "height: 30px; width: 100px; padding: 0 8px; border: 1px solid #B3E5FC; border-radius: 6px;",
                    value: "{rating_input}",
                    oninput: move |e| {
                        let raw = e.value();
                        if let Ok(rating) = raw.parse::<f64>() {
                            request.write().rating = rating;
                        }
                        rating_input.set(raw);
                    },
                }
            }
            label {
                style: "display:flex; flex-direction: column; gap: 4px; font-size: 14px;",
                "Review:"
                textarea {
                    rows: "6",
                    required: true,
                    style: "padding: 8px; border: 1px solid #B3E5FC; border-radius: 6px; font-size: 14px; resize: vertical;",
                    value: "{request.read().text}",
                    oninput: move |e| request.write().text = e.value(),
                }
            }
            if let Some(result) = outcome.read().as_ref() {
                div { style: "color:{message_color}; font-size: 14px;", "{result.message()}" }
            }
            if let Some(message) = failure() {
                div { style: "color:#B91C1C; font-size: 14px;", "{message}" }
            }
            button {
                r#type: "submit",
                disabled: busy(),
                style: "height: 38px; border: none; border-radius: 8px; background: #0288d1; color: white; font-size: 16px; cursor: pointer;",
                "Submit Review"
            }
        }
    }
}
