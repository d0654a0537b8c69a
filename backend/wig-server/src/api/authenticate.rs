//! Per-request bearer-token authentication.
//!
//! One pass per request: extract the bearer token, verify it, resolve the
//! subject email to a full user and bind it to the request's extensions.
//! Every failure leaves the request unauthenticated and continues; the 401
//! is produced later, only when a handler demands a bound identity through
//! the `CurrentUser` extractor.

use crate::state::AppState;

use wig_auth::TokenService;
use wig_core::User;
use wig_db::UserRepository;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// The identity bound to an authenticated request
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Paths that bypass token handling entirely: the OAuth redirect dance and
/// operational endpoints never carry a bearer token.
pub fn is_public_path(path: &str) -> bool {
    path.starts_with("/oauth2/")
        || path.starts_with("/login/oauth2/")
        || path == "/health"
        || path.starts_with("/api-docs")
}

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if is_public_path(request.uri().path()) {
        return next.run(request).await;
    }

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| TokenService::extract_bearer(Some(header)))
        .map(str::to_string);

    if let Some(token) = token {
        match state.token_service.verify(&token) {
            Ok(claims) => {
                let repo = UserRepository::new(state.pool.clone());
                match repo.find_by_email(&claims.sub).await {
                    Ok(Some(user)) => {
                        log::debug!("Authenticated request for {}", user.email);
                        request.extensions_mut().insert(AuthUser(user));
                    }
                    Ok(None) => {
                        // Verified token for a deleted/unknown account stays
                        // unauthenticated
                        log::warn!("Token subject {} has no account", claims.sub);
                    }
                    Err(e) => {
                        log::error!("User lookup during authentication failed: {}", e);
                    }
                }
            }
            Err(e) => {
                // Degrades exactly this request, never the process
                log::debug!("Rejected bearer token: {}", e);
            }
        }
    }

    next.run(request).await
}
