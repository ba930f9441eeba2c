use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use donatugee::store::Store;
use donatugee::create_app;
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tower::ServiceExt;

async fn test_app() -> Router {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("in-memory sqlite");
    let store = Store::new(db);
    store.initialize_schema().await.expect("migrations");
    create_app(store)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn text_body(response: axum::response::Response) -> String {
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_insert_techfugee_twice_returns_the_same_row() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/api/v1/insert-techfugee",
            "name=Amira&email=amira%40example.org&skills=rust",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let first = json_body(response).await;
    assert_eq!(first["name"], "Amira");

    let response = app
        .oneshot(form_post(
            "/api/v1/insert-techfugee",
            "name=Other&email=amira%40example.org&skills=none",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let second = json_body(response).await;
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["name"], "Amira");
}

#[tokio::test]
async fn test_insert_donator_duplicate_is_a_500() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/api/v1/insert-donator",
            "name=Laptops4All&email=give%40laptops.example&website=laptops.example&address=Berlin",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(form_post(
            "/api/v1/insert-donator",
            "name=Impostor&email=give%40laptops.example&website=&address=",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text_body(response).await, "exists already");
}

#[tokio::test]
async fn test_insert_challenge_rejects_non_numeric_amount() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/api/v1/insert-challenge",
            "id_donator=1&name=Laptops&description=&laptop_type=any&amount=abc&hardware_provided=yes&duration=",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Nothing was created.
    let response = app.oneshot(get("/api/v1/challenges")).await.unwrap();
    let challenges = json_body(response).await;
    assert_eq!(challenges.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_challenge_amount_survives_the_round_trip() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/api/v1/insert-challenge",
            "id_donator=1&name=Laptops&description=&laptop_type=any&amount=5&hardware_provided=yes&duration=3+months",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = json_body(response).await;
    assert_eq!(created["amount"], 5);

    let uri = format!("/api/v1/challenge?id={}", created["id"]);
    let response = app.oneshot(get(&uri)).await.unwrap();
    let fetched = json_body(response).await;
    assert_eq!(fetched["amount"], 5);
    assert!(fetched["applications"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_numeric_id_is_a_500() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/v1/techfugee?id=abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_missing_techfugee_is_a_zero_valued_profile() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/v1/techfugee?id=999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let profile = json_body(response).await;
    assert_eq!(profile["id"], 0);
    assert_eq!(profile["email"], "");
}

#[tokio::test]
async fn test_update_auth_unknown_id_is_a_500() {
    let app = test_app().await;

    let response = app
        .oneshot(form_post("/api/v1/update-auth", "id=999&passed=true"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text_body(response).await, "record not found");
}

#[tokio::test]
async fn test_accept_application_flow() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/api/v1/insert-application",
            "techfugee_id=1&challenge_id=1",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let filed = json_body(response).await;
    assert_eq!(filed["accepted"], false);

    let body = format!("id={}", filed["id"]);
    let response = app
        .clone()
        .oneshot(form_post("/api/v1/accept-application", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let accepted = json_body(response).await;
    assert_eq!(accepted["accepted"], true);

    // Filing the same pair again is an error.
    let response = app
        .oneshot(form_post(
            "/api/v1/insert-application",
            "techfugee_id=1&challenge_id=1",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text_body(response).await, "exists already");
}

#[tokio::test]
async fn test_application_by_techfugee_lists_the_challenge() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/api/v1/insert-challenge",
            "id_donator=1&name=Laptops&description=&laptop_type=any&amount=2&hardware_provided=no&duration=",
        ))
        .await
        .unwrap();
    let challenge = json_body(response).await;

    let body = format!("techfugee_id=7&challenge_id={}", challenge["id"]);
    let response = app
        .clone()
        .oneshot(form_post("/api/v1/insert-application", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/api/v1/application-by-techfugee?id=7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let challenges = json_body(response).await;
    let challenges = challenges.as_array().unwrap();
    assert_eq!(challenges.len(), 1);
    assert_eq!(challenges[0]["id"], challenge["id"]);
    assert_eq!(challenges[0]["applications"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_login_returns_the_registered_profile() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(form_post(
            "/api/v1/insert-techfugee",
            "name=Amira&email=amira%40example.org&skills=rust",
        ))
        .await
        .unwrap();
    let registered = json_body(response).await;

    let response = app
        .oneshot(get("/api/v1/login?email=amira%40example.org"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let profile = json_body(response).await;
    assert_eq!(profile["id"], registered["id"]);
    assert_eq!(profile["applications"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_techfugees_list_is_json() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/v1/techfugees")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let techfugees = json_body(response).await;
    assert!(techfugees.as_array().unwrap().is_empty());
}
