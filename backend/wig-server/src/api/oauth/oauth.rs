//! OAuth login REST handlers.
//!
//! `GET /oauth2/authorization/{provider}` starts the dance;
//! `GET /login/oauth2/code/{provider}` receives the code, normalizes the
//! provider payload, resolves it to a local user and redirects back to the
//! frontend with a freshly issued session token.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::oauth::callback_query::OAuthCallbackQuery;
use crate::api::oauth::completion::completion_redirect_url;
use crate::api::oauth::resolution::resolve_oauth_user;
use crate::state::AppState;

use wig_auth::OAuthUserInfo;
use wig_core::AuthProvider;
use wig_db::UserRepository;

use std::panic::Location;

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use error_location::ErrorLocation;

/// GET /oauth2/authorization/{provider}
///
/// Redirect the browser to the provider's authorize page
pub async fn authorize(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> ApiResult<Redirect> {
    let provider = parse_provider(&provider)?;
    let url = state.oauth.authorization_url(provider)?;

    Ok(Redirect::to(&url))
}

/// GET /login/oauth2/code/{provider}
///
/// Provider redirect target: complete the login and hand off to the frontend
pub async fn callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(query): Query<OAuthCallbackQuery>,
) -> ApiResult<Redirect> {
    let provider = parse_provider(&provider)?;

    let attributes = state.oauth.fetch_user_attributes(provider, &query.code).await?;
    let info = OAuthUserInfo::from_attributes(provider, &attributes)?;

    log::info!(
        "OAuth login: provider={}, email={}",
        provider,
        info.email.as_deref().unwrap_or("<none>")
    );

    let repo = UserRepository::new(state.pool.clone());
    let user = resolve_oauth_user(&repo, provider, &info).await?;

    let token = state.token_service.issue(&user.email, user.role)?;
    let url = completion_redirect_url(&state.frontend_url, &token, &user);

    log::info!("OAuth login success: email={}, provider={}", user.email, provider);

    Ok(Redirect::to(&url))
}

#[track_caller]
fn parse_provider(registration_id: &str) -> ApiResult<AuthProvider> {
    AuthProvider::from_registration_id(registration_id).map_err(|_| {
        // Unknown provider in the path is a configuration error, not user error
        log::error!("Unknown OAuth provider in path: {}", registration_id);
        ApiError::UnsupportedProvider {
            provider: registration_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })
}
