//! Handlers for the `/properties` resource.
//!
//! The listing read is deliberately forgiving: filter parameters are
//! normalized by the pure query builder in `hearth_core`, so malformed user
//! input narrows nothing and never fails the request. Only storage faults
//! surface as errors.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use hearth_core::error::CoreError;
use hearth_core::listing::{validate_new_listing, NewListing};
use hearth_core::query::{ListingParams, ListingQuery};
use hearth_core::types::DbId;
use hearth_db::models::property::Property;
use hearth_db::repositories::PropertyRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// GET /api/v1/properties
///
/// Filtered, sorted, capped listing read.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> AppResult<Json<ListResponse<Property>>> {
    let query = ListingQuery::from_params(&params);
    let properties = PropertyRepo::list(&state.pool, &query).await?;

    tracing::debug!(
        count = properties.len(),
        sort = ?query.sort,
        limit = ?query.limit,
        "Listing query executed"
    );

    Ok(Json(ListResponse::new(properties)))
}

/// GET /api/v1/properties/{id}
///
/// Single record by identity. Unknown ids answer 404, distinct from a
/// storage fault's 500, so clients can render a not-found page instead of a
/// transient-error page.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Property>>> {
    let property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Property",
            id,
        })?;

    Ok(Json(DataResponse::new(property)))
}

/// POST /api/v1/properties
///
/// Administrative write, session-gated. Validates the listing invariants
/// field-by-field before persisting.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<NewListing>,
) -> AppResult<(StatusCode, Json<DataResponse<Property>>)> {
    validate_new_listing(&input)?;

    let property = PropertyRepo::create(&state.pool, &input).await?;

    tracing::info!(
        property_id = property.id,
        user_id = auth.user_id,
        "Property created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(property))))
}
