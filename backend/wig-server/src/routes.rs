use crate::api::auth::auth::{login, me, signup};
use crate::api::authenticate::authenticate;
use crate::api::oauth::oauth::{authorize, callback};
use crate::health;
use crate::state::AppState;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Local auth
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        // OAuth login
        .route("/oauth2/authorization/{provider}", get(authorize))
        .route("/login/oauth2/code/{provider}", get(callback))
        // Bearer-token authentication, one pass per request
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        // Add shared state
        .with_state(state)
        // CORS middleware (frontend runs on a different origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
