use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use backend::{
    api,
    api_utils::api_client::RestaurantApiClient,
    config::ApiConfig,
    error::ApiError,
};
use common::{
    auth::{AuthOutcome, LoginRequest, SignupRequest},
    filter_state::{FilterField, FilterFlag, FilterState},
    restaurant::Amenity,
    review::{ReviewOutcome, ReviewRejection, ReviewRequest},
    session::AuthToken,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, Default)]
struct Seen {
    query: Option<String>,
    authorization: Option<String>,
    requested_with: Option<String>,
    csrf: Option<String>,
    cookie: Option<String>,
    body: Option<Value>,
}

type Recorder = Arc<Mutex<Vec<Seen>>>;

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(|s| s.to_string())
}

fn record(recorder: &Recorder, headers: &HeaderMap, query: Option<String>, body: Option<Value>) {
    recorder.lock().unwrap().push(Seen {
        query,
        authorization: header(headers, "authorization"),
        requested_with: header(headers, "x-requested-with"),
        csrf: header(headers, "x-csrftoken"),
        cookie: header(headers, "cookie"),
        body,
    });
}

async fn restaurants(State(recorder): State<Recorder>, headers: HeaderMap, RawQuery(query): RawQuery) -> impl IntoResponse {
    record(&recorder, &headers, query, None);
    Json(json!({
        "restaurants": [
            {
                "name": "Luigi's",
                "cuisine": ["Italian"],
                "ambience": ["casual"],
                "rating": 4.5,
                "city": "Boston",
                "price_range": 3,
                "delivery": true,
                "latitude": 42.36,
                "longitude": -71.05,
                "monday_open": "09:00:00",
                "monday_close": "17:00:00"
            }
        ]
    }))
}

async fn cuisines() -> impl IntoResponse {
    Json(json!([{"id": 1, "name": "Italian"}, {"id": 2, "name": "Thai"}]))
}

async fn ambiences() -> impl IntoResponse {
    Json(json!([{"id": 9, "name": "romantic"}]))
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == "correct" {
        (StatusCode::OK, Json(json!({"token": "tok-123", "username": body["username"]})))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"})))
    }
}

async fn signup(Json(body): Json<Value>) -> impl IntoResponse {
    if body["username"] == "taken" {
        (StatusCode::BAD_REQUEST, Json(json!({"error": "Username already exists"})))
    } else {
        (StatusCode::CREATED, Json(json!({"token": "new-tok", "username": body["username"], "user_id": 5})))
    }
}

async fn add_review(State(recorder): State<Recorder>, headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    record(&recorder, &headers, None, Some(body.clone()));
    let text = body["text"].as_str().unwrap_or_default();
    if text.contains("As an AI language model") {
        (StatusCode::BAD_REQUEST, Json(json!({"message": "Your review appears to be AI-generated. Please revise it and try again."})))
    } else if body["restaurant_name"] == "Nowhere" {
        (StatusCode::BAD_REQUEST, Json(json!({"error": "Restaurant 'Nowhere' does not exist."})))
    } else {
        (StatusCode::CREATED, Json(json!({"message": "Thank you for your review! It has been submitted successfully."})))
    }
}

async fn spawn_mock_api() -> (RestaurantApiClient, Recorder) {
    let recorder: Recorder = Arc::default();
    let app = Router::new()
        .route("/api/restaurants/", get(restaurants))
        .route("/api/cuisines/", get(cuisines))
        .route("/api/ambiences/", get(ambiences))
        .route("/login/", post(login))
        .route("/signup/", post(signup))
        .route("/add_review/", post(add_review))
        .with_state(recorder.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let client = RestaurantApiClient::new(ApiConfig::new(format!("http://{addr}"), None)).unwrap();
    (client, recorder)
}

async fn spawn_failing_api(status: StatusCode, body: &'static str) -> RestaurantApiClient {
    let app = Router::new()
        .route("/api/restaurants/", get(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    RestaurantApiClient::new(ApiConfig::new(format!("http://{addr}"), None)).unwrap()
}

#[tokio::test]
async fn listing_sends_only_set_filters_and_xhr_headers() {
    let (client, recorder) = spawn_mock_api().await;
    let mut filters = FilterState::default();
    filters.set_input(FilterField::City, "Boston");
    filters.set_input(FilterField::PriceRange, "3");
    filters.toggle_flag(FilterFlag::Amenity(Amenity::Delivery));
    let token = AuthToken::new("tok-123").unwrap();

    let listing = api::list_restaurants(&client, &filters, Some(&token)).await.unwrap();
    assert_eq!(listing.restaurants.len(), 1);
    assert_eq!(listing.restaurants[0].name, "Luigi's");
    assert_eq!(listing.restaurants[0].price_range, Some(3));

    let seen = recorder.lock().unwrap()[0].clone();
    assert_eq!(seen.query.as_deref(), Some("city=Boston&price_range=3&delivery=true"));
    assert_eq!(seen.authorization.as_deref(), Some("Token tok-123"));
    assert_eq!(seen.requested_with.as_deref(), Some("XMLHttpRequest"));
}

#[tokio::test]
async fn listing_without_filters_has_no_query() {
    let (client, recorder) = spawn_mock_api().await;
    api::list_restaurants(&client, &FilterState::default(), None).await.unwrap();
    let seen = recorder.lock().unwrap()[0].clone();
    assert_eq!(seen.query, None);
    assert_eq!(seen.authorization, None);
}

#[tokio::test]
async fn reference_data_loads_both_lists() {
    let (client, _) = spawn_mock_api().await;
    let data = api::load_reference_data(&client).await.unwrap();
    assert_eq!(data.cuisine_name(2), Some("Thai"));
    assert_eq!(data.ambience_name(9), Some("romantic"));
}

#[tokio::test]
async fn reference_data_keeps_the_list_that_loaded() {
    let app = Router::new().route("/api/cuisines/", get(cuisines));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let client = RestaurantApiClient::new(ApiConfig::new(format!("http://{addr}"), None)).unwrap();

    let data = api::load_reference_data(&client).await.unwrap();
    assert_eq!(data.cuisine_name(2), Some("Thai"));
    assert!(data.ambiences.is_empty());
}

#[tokio::test]
async fn reference_data_fails_when_both_lists_fail() {
    let client = spawn_failing_api(StatusCode::OK, "[]").await;
    let err = api::load_reference_data(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));
}

#[tokio::test]
async fn non_success_listing_is_http_error() {
    let client = spawn_failing_api(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    let err = api::list_restaurants(&client, &FilterState::default(), None).await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 500, .. }));
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn html_listing_is_decode_error() {
    let client = spawn_failing_api(StatusCode::OK, "<html>restaurant_list</html>").await;
    let err = api::list_restaurants(&client, &FilterState::default(), None).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_api_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = RestaurantApiClient::new(ApiConfig::new(format!("http://{addr}"), None)).unwrap();
    let err = api::list_cuisines(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn login_and_signup_outcomes() {
    let (client, _) = spawn_mock_api().await;

    let ok = api::login(&client, &LoginRequest { username: "ana".into(), password: "correct".into() }).await.unwrap();
    assert!(matches!(ok, AuthOutcome::SignedIn { ref token, .. } if token.as_str() == "tok-123"));

    let bad = api::login(&client, &LoginRequest { username: "ana".into(), password: "wrong".into() }).await.unwrap();
    assert_eq!(bad, AuthOutcome::Rejected { message: "Invalid credentials".into() });

    let request = SignupRequest { username: "taken".into(), email: "t@example.com".into(), password: "pw".into() };
    let dup = api::signup(&client, &request).await.unwrap();
    assert_eq!(dup, AuthOutcome::Rejected { message: "Username already exists".into() });

    let request = SignupRequest { username: "fresh".into(), ..request };
    assert!(matches!(api::signup(&client, &request).await.unwrap(), AuthOutcome::SignedIn { .. }));
}

#[tokio::test]
async fn review_carries_token_csrf_and_payload() {
    let (client, recorder) = spawn_mock_api().await;
    let token = AuthToken::new("tok-123").unwrap();
    let request = ReviewRequest { restaurant_name: "Luigi's".into(), rating: 4.5, text: "Great gnocchi".into() };

    let outcome = api::add_review(&client, &request, Some(&token), Some("csrf-abc")).await.unwrap();
    assert!(matches!(outcome, ReviewOutcome::Accepted { .. }));

    let seen = recorder.lock().unwrap()[0].clone();
    assert_eq!(seen.authorization.as_deref(), Some("Token tok-123"));
    assert_eq!(seen.csrf.as_deref(), Some("csrf-abc"));
    assert_eq!(seen.cookie.as_deref(), Some("csrftoken=csrf-abc"));
    assert_eq!(seen.body, Some(json!({"restaurant_name": "Luigi's", "rating": 4.5, "text": "Great gnocchi"})));
}

#[tokio::test]
async fn review_rejections_are_classified() {
    let (client, _) = spawn_mock_api().await;

    let ai = ReviewRequest { restaurant_name: "Luigi's".into(), rating: 5.0, text: "As an AI language model, I loved it".into() };
    let outcome = api::add_review(&client, &ai, None, None).await.unwrap();
    assert!(matches!(outcome, ReviewOutcome::Rejected { reason: ReviewRejection::AiGenerated, .. }));

    let unknown = ReviewRequest { restaurant_name: "Nowhere".into(), rating: 2.0, text: "meh".into() };
    let outcome = api::add_review(&client, &unknown, None, None).await.unwrap();
    assert!(matches!(outcome, ReviewOutcome::Rejected { reason: ReviewRejection::Invalid, .. }));
}
