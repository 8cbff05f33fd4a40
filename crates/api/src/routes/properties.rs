//! Route definitions for the `/properties` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::properties;
use crate::state::AppState;

/// Routes mounted at `/properties`.
///
/// ```text
/// GET  /       -> list (filtered/sorted/capped)
/// POST /       -> create (session-gated)
/// GET  /{id}   -> single record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(properties::list).post(properties::create))
        .route("/{id}", get(properties::get))
}
