use crate::api::oauth::provider_client::OAuthClient;

use wig_auth::TokenService;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state.
///
/// Everything here is constructed once at startup and read-only afterwards;
/// the token service in particular is safe to call from any number of
/// concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_service: Arc<TokenService>,
    pub oauth: Arc<OAuthClient>,
    pub frontend_url: String,
}
