//! API integration tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use videostore_server::{
    api::create_router,
    config::AppConfig,
    models::{Film, ReleaseTier, BASIC, PREMIUM},
    repository::{CatalogueStore, InMemoryCatalogue},
    AppState,
};

fn app_with(catalogue: Arc<InMemoryCatalogue>) -> Router {
    create_router(AppState::new(AppConfig::default(), catalogue))
}

fn app() -> Router {
    app_with(Arc::new(InMemoryCatalogue::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(&app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_catalogue_size() {
    let catalogue = Arc::new(InMemoryCatalogue::with_films([Film::new(
        "Loki",
        "Marvel",
        ReleaseTier::New,
    )]));
    let (status, body) = send(&app_with(catalogue), get("/ready")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["films"], 1);
}

#[tokio::test]
async fn test_add_and_find_film() {
    let app = app();

    let (status, body) = send(
        &app,
        post_json(
            "/catalogue/film/Regular",
            json!({"name": "Black Widow", "director": "Marvel"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"name": "Black Widow", "director": "Marvel", "release": "Regular"})
    );

    let (status, body) = send(&app, get("/catalogue/film?name=Black%20Widow")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["director"], "Marvel");
    assert_eq!(body["release"], "Regular");
}

#[tokio::test]
async fn test_add_duplicate_film_conflicts() {
    let catalogue = Arc::new(InMemoryCatalogue::new());
    let app = app_with(catalogue.clone());
    let film = json!({"name": "Loki", "director": "Marvel"});

    let (status, _) = send(&app, post_json("/catalogue/film/new", film.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, post_json("/catalogue/film/old", film)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "FilmAlreadyExists");
    assert_eq!(catalogue.count().unwrap(), 1);
}

#[tokio::test]
async fn test_add_film_unknown_release() {
    let (status, body) = send(
        &app(),
        post_json(
            "/catalogue/film/vintage",
            json!({"name": "Loki", "director": "Marvel"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_add_film_empty_fields_lists_each() {
    let (status, body) = send(
        &app(),
        post_json("/catalogue/film/new", json!({"name": "", "director": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"],
        json!(["film name cannot be empty", "film director cannot be empty"])
    );
}

#[tokio::test]
async fn test_add_film_malformed_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/catalogue/film/new")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_add_film_requires_json_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/catalogue/film/new")
        .body(Body::from(r#"{"name": "Loki", "director": "Marvel"}"#))
        .unwrap();
    let (status, _) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_find_film_not_found() {
    let (status, body) = send(&app(), get("/catalogue/film?name=Loki")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchFilm");
}

#[tokio::test]
async fn test_find_film_missing_name() {
    let (status, _) = send(&app(), get("/catalogue/film")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app(), get("/catalogue/film?name=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_return_invoice() {
    let catalogue = Arc::new(InMemoryCatalogue::with_films([
        Film::new("Loki", "Marvel", ReleaseTier::New),
        Film::new("Morbius", "Marvel", ReleaseTier::Old),
    ]));
    let (status, body) = send(
        &app_with(catalogue),
        post_json(
            "/store/return",
            json!({"return": [{"name": "Loki", "days": 5}, {"name": "Morbius", "days": 6}]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["return"],
        json!([{"name": "Loki", "days": 5}, {"name": "Morbius", "days": 6}])
    );
    assert_eq!(body["price"], 5 * PREMIUM + 2 * BASIC);
    assert_eq!(body["currency"], "SEK");
    assert_eq!(body["monetary_unit"], "Kr");
}

#[tokio::test]
async fn test_return_unknown_films_rejected() {
    let catalogue = Arc::new(InMemoryCatalogue::with_films([Film::new(
        "Loki",
        "Marvel",
        ReleaseTier::New,
    )]));
    let (status, body) = send(
        &app_with(catalogue),
        post_json(
            "/store/return",
            json!({"return": [
                {"name": "Dune", "days": 1},
                {"name": "Loki", "days": 1},
                {"name": "Tenet", "days": 1}
            ]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidRentalRequest");
    assert_eq!(
        body["details"],
        json!(["Film \"Dune\" was not found", "Film \"Tenet\" was not found"])
    );
    assert!(body.get("price").is_none());
}

#[tokio::test]
async fn test_return_boundary_validation() {
    let app = app();

    for payload in [
        json!({"return": []}),
        json!({"return": [{"name": "", "days": 1}]}),
        json!({"return": [{"name": "Loki", "days": 0}]}),
        json!({"films": [{"name": "Loki", "days": 1}]}),
    ] {
        let (status, _) = send(&app, post_json("/store/return", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
