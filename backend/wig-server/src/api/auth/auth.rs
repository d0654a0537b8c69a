//! Local auth REST handlers: signup, login, current user.

use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::signup_request::SignupRequest;
use crate::api::auth::token_response::TokenResponse;
use crate::api::auth::user_response::UserResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::state::AppState;

use wig_auth::password::{hash_password, verify_password};
use wig_db::{DbError, UserRepository};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

/// POST /api/auth/signup
///
/// Register a local account. 201 on success, 400 when the email is taken.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    request.validate()?;
    log::info!("Signup attempt: email={}", request.email);

    let repo = UserRepository::new(state.pool.clone());

    if repo.exists_by_email(&request.email).await? {
        return Err(ApiError::EmailInUse {
            email: request.email,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash = hash_password(&request.password)?;

    let user = match repo
        .create_local(&request.email, &password_hash, &request.name)
        .await
    {
        Ok(user) => user,
        // Concurrent signup with the same email lost the uniqueness race
        Err(DbError::UniqueViolation { .. }) => {
            return Err(ApiError::EmailInUse {
                email: request.email,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(e) => return Err(e.into()),
    };

    log::info!("Signup complete: id={}, email={}", user.id, user.email);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/auth/login
///
/// Verify email/password and issue a session token. All failure modes
/// produce the same 401 so the endpoint cannot be used to probe accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    log::info!("Login attempt: email={}", request.email);

    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_email(&request.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    // OAuth-origin accounts have no password and cannot log in locally
    let stored_hash = user.password_hash.as_deref().ok_or_else(invalid_credentials)?;

    if !verify_password(&request.password, stored_hash) {
        return Err(invalid_credentials());
    }

    let token = state.token_service.issue(&user.email, user.role)?;
    log::info!("Login success: email={}", user.email);

    Ok(Json(TokenResponse::of(token, &user)))
}

/// GET /api/auth/me
///
/// Current authenticated user; 401 when no identity is bound.
pub async fn me(CurrentUser(user): CurrentUser) -> ApiResult<Json<UserResponse>> {
    Ok(Json(user.into()))
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}
