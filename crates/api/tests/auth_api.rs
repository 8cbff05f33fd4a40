//! HTTP-level integration tests for registration, login, and the session
//! gate on the dashboard.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, get_auth, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn register_body(name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "email": email,
        "phone": "555-0100",
        "password": "a-long-enough-password",
    })
}

async fn register(app: Router, name: &str, email: &str) -> serde_json::Value {
    let response = post_json(app, "/api/v1/register", register_body(name, email)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn login(app: Router, email: &str, password: &str) -> axum::response::Response {
    let body = serde_json::json!({ "email": email, "password": password });
    post_json(app, "/api/v1/auth/login", body).await
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn register_creates_account_without_session(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = register(app, "Ada", "ada@example.com").await;

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Ada");
    assert_eq!(json["data"]["email"], "ada@example.com");
    // No credential material and no session in the response.
    assert!(json["data"].get("password_hash").is_none());
    assert!(json.get("token").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_with_missing_fields_reports_them(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "name": "", "email": "", "password": "" });
    let response = post_json(app, "/api/v1/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("name"), "got: {error}");
    assert!(error.contains("email"), "got: {error}");
    assert!(error.contains("password"), "got: {error}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_registration_is_rejected_and_first_account_unchanged(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "Ada", "ada@example.com").await;

    // Same email, different case and different name.
    let body = serde_json::json!({
        "name": "Mallory",
        "email": "ADA@example.com",
        "password": "another-password",
    });
    let response = post_json(app.clone(), "/api/v1/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    // The rejection must not reveal that the address is taken.
    let error = json["error"].as_str().unwrap();
    assert!(
        !error.to_lowercase().contains("already"),
        "rejection must not confirm the duplicate: {error}"
    );

    // The first account still logs in with its original credentials.
    let response = login(app, "ada@example.com", "a-long-enough-password").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Ada");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn register_then_login_round_trips(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "Ada", "ada@example.com").await;

    let response = login(app, "ada@example.com", "a-long-enough-password").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["name"], "Ada");
    assert_eq!(json["user"]["email"], "ada@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_email_lookup_is_case_insensitive(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "Ada", "ada@example.com").await;

    let response = login(app, "ADA@Example.COM", "a-long-enough-password").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_and_unknown_email_share_one_rejection(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "Ada", "ada@example.com").await;

    let wrong_password = login(app.clone(), "ada@example.com", "not-the-password").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(wrong_password).await;

    let unknown_email = login(app, "nobody@example.com", "a-long-enough-password").await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(unknown_email).await;

    // Identical message string in both cases: no account enumeration.
    assert_eq!(wrong_password["error"], unknown_email["error"]);
    assert_eq!(wrong_password["error"], "Invalid email or password");
}

// ---------------------------------------------------------------------------
// Session gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_without_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    // No protected data in the rejection.
    assert!(json.get("data").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_with_garbage_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/dashboard", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_with_valid_session_returns_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    register(app.clone(), "Ada", "ada@example.com").await;

    let response = login(app.clone(), "ada@example.com", "a-long-enough-password").await;
    let token = body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get_auth(app, "/api/v1/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], "Ada");
    assert_eq!(json["data"]["email"], "ada@example.com");
    assert!(json["data"].get("password_hash").is_none());
}
