pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, me, signup},
        login_request::LoginRequest,
        signup_request::SignupRequest,
        token_response::TokenResponse,
        user_response::UserResponse,
    },
    authenticate::{AuthUser, authenticate, is_public_path},
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    oauth::{
        callback_query::OAuthCallbackQuery,
        completion::completion_redirect_url,
        oauth::{authorize, callback},
        provider_client::OAuthClient,
        resolution::resolve_oauth_user,
    },
};

pub use crate::config::Config;
pub use crate::routes::build_router;
pub use crate::state::AppState;
