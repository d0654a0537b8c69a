//! Axum extractor for the authenticated user

use crate::api::authenticate::AuthUser;
use crate::api::error::ApiError;
use crate::state::AppState;

use wig_core::User;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Demands the identity bound by the authentication middleware.
///
/// This is the single place an unauthenticated request turns into a 401;
/// the middleware itself never rejects.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<AuthUser>()
                .map(|auth| CurrentUser(auth.0.clone()))
                .ok_or_else(|| ApiError::Unauthorized {
                    location: ErrorLocation::from(Location::caller()),
                })
        }
    }
}
