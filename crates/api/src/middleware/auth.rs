//! JWT session gate for Axum handlers.
//!
//! Protected routes consult this extractor before any data is touched: a
//! missing, malformed, or expired token short-circuits with 401 and points
//! the client at the login entry point. No protected view is ever rendered
//! without a verified identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use hearth_core::error::CoreError;
use hearth_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires a session:
///
/// ```ignore
/// async fn dashboard(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "serving dashboard");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// Display name carried in the token.
    pub name: String,
    /// Account email carried in the token.
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Not signed in. Log in to continue.".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized(
                "Session expired or invalid. Log in to continue.".into(),
            ))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            name: claims.name,
            email: claims.email,
        })
    }
}
