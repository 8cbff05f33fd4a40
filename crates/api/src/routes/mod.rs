pub mod auth;
pub mod health;
pub mod properties;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /properties                GET list (public), POST create (session-gated)
/// /properties/{id}           GET single record (public)
///
/// /auth/login                POST login (public)
/// /register                  POST create account (public)
/// /dashboard                 GET profile (session-gated)
///
/// /contact                   POST contact-an-agent message (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/properties", properties::router())
        .nest("/auth", auth::router())
        .route("/register", post(handlers::auth::register))
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route("/contact", post(handlers::contact::submit))
}
