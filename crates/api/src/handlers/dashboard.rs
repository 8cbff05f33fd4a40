//! Handler for the authenticated dashboard view.

use axum::extract::State;
use axum::Json;

use hearth_core::error::CoreError;
use hearth_db::models::user::UserProfile;
use hearth_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard
///
/// Session-gated. Returns the authenticated user's profile, freshly read so
/// the dashboard reflects the stored record rather than stale token claims.
pub async fn dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            // Token outlived the account; treat it like any other dead session.
            AppError::Core(CoreError::Unauthorized(
                "Session expired or invalid. Log in to continue.".into(),
            ))
        })?;

    Ok(Json(DataResponse::new(UserProfile::from(user))))
}
