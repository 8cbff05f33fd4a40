//! Handlers for registration and login.
//!
//! Both rejection paths are deliberately uninformative: login answers with
//! one fixed string whether the email is unknown or the password is wrong,
//! and registration answers with one fixed string whether a field failed or
//! the email is already taken. The real cause goes to the log for operators.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use hearth_core::error::CoreError;
use hearth_core::types::DbId;
use hearth_db::models::user::{CreateUser, UserProfile};
use hearth_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// The one message every failed login gets, regardless of cause.
pub const LOGIN_REJECTION: &str = "Invalid email or password";

/// The one message every rejected registration gets, regardless of cause.
/// Keeping it identical for duplicates and field problems prevents account
/// enumeration through the registration form.
pub const REGISTER_REJECTION: &str = "Unable to register with the provided details";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

/// Successful login response: the session token and who it belongs to.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
    pub user: SessionUser,
}

/// Public user identity embedded in [`SessionResponse`].
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Exchange credentials for a signed session token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    // Unknown email and wrong password must be indistinguishable to the
    // caller, so both exits share LOGIN_REJECTION.
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(LOGIN_REJECTION.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            LOGIN_REJECTION.into(),
        )));
    }

    let token = generate_token(user.id, &user.name, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(SessionResponse {
        success: true,
        token,
        expires_in: state.config.jwt.token_expiry_mins * 60,
        user: SessionUser {
            id: user.id,
            name: user.name,
            email: user.email,
        },
    }))
}

/// POST /api/v1/register
///
/// Create an account. Registration does not grant a session; the client is
/// expected to log in afterwards.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserProfile>>)> {
    let mut problems: Vec<&str> = Vec::new();
    if input.name.trim().is_empty() {
        problems.push("name: must not be empty");
    }
    if input.email.trim().is_empty() {
        problems.push("email: must not be empty");
    }
    if input.password.is_empty() {
        problems.push("password: must not be empty");
    }
    if !problems.is_empty() {
        return Err(AppError::Core(CoreError::Validation(problems.join("; "))));
    }

    // Pre-check, with the unique index as the backstop against races.
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        tracing::info!(email = %input.email, "Registration rejected: email already in use");
        return Err(AppError::BadRequest(REGISTER_REJECTION.into()));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        phone: input.phone.filter(|p| !p.trim().is_empty()),
        password_hash,
    };

    let user = match UserRepo::create(&state.pool, &create).await {
        Ok(user) => user,
        // A concurrent registration won the race; answer exactly as the
        // pre-check would have.
        Err(sqlx::Error::Database(db_err))
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_users_email") =>
        {
            tracing::info!(email = %create.email, "Registration rejected: email already in use (race)");
            return Err(AppError::BadRequest(REGISTER_REJECTION.into()));
        }
        Err(other) => return Err(other.into()),
    };

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(UserProfile::from(user))),
    ))
}
