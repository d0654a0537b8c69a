//! REST API error types
//!
//! Every failure crossing the HTTP boundary is reduced to the fixed-shape
//! body `{code, message, timestamp, status}`; internal detail (sqlx errors,
//! provider responses, stack context) is logged here and never serialized.

use wig_core::AuthProvider;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;
use wig_db::DbError;

/// Flat JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g., "UNAUTHORIZED", "EMAIL_IN_USE")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Additional context, only where it does not leak internals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// HTTP status code, duplicated into the body
    pub status: u16,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// A protected resource was reached without a bound identity (401)
    #[error("Unauthenticated request {location}")]
    Unauthorized { location: ErrorLocation },

    /// Wrong email/password pair, or a provider-only account (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Signup with an email that is already registered (400)
    #[error("Email already in use: {email} {location}")]
    EmailInUse {
        email: String,
        location: ErrorLocation,
    },

    /// Request body failed validation (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// OAuth login for an email already bound to a different origin (409)
    #[error("Email {email} is already registered with {existing} {location}")]
    ProviderConflict {
        email: String,
        existing: AuthProvider,
        location: ErrorLocation,
    },

    /// Unknown or unconfigured OAuth provider (400)
    #[error("Unsupported OAuth provider: {provider} {location}")]
    UnsupportedProvider {
        provider: String,
        location: ErrorLocation,
    },

    /// The provider rejected or failed the code exchange / userinfo fetch (502)
    #[error("OAuth provider request failed: {message} {location}")]
    OAuthExchange {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with location for debugging; the client sees none of it
        log::error!("{}", self);

        let (status, code, message) = match self {
            ApiError::Unauthorized { .. } => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required. Please log in and try again.".to_string(),
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid email or password".to_string(),
            ),
            ApiError::EmailInUse { email, .. } => (
                StatusCode::BAD_REQUEST,
                "EMAIL_IN_USE",
                format!("Email is already in use: {}", email),
            ),
            ApiError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            ApiError::ProviderConflict {
                email, existing, ..
            } => (
                StatusCode::CONFLICT,
                "PROVIDER_CONFLICT",
                format!("Email {} is already registered with {}", email, existing),
            ),
            ApiError::UnsupportedProvider { provider, .. } => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_PROVIDER",
                format!("Unsupported OAuth provider: {}", provider),
            ),
            ApiError::OAuthExchange { .. } => (
                StatusCode::BAD_GATEWAY,
                "OAUTH_PROVIDER_ERROR",
                "OAuth provider request failed".to_string(),
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message,
            timestamp: Utc::now(),
            details: None,
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Raw persistence errors never cross the boundary
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth-core errors to API errors
impl From<wig_auth::AuthError> for ApiError {
    #[track_caller]
    fn from(e: wig_auth::AuthError) -> Self {
        use wig_auth::AuthError;
        match e {
            AuthError::UnsupportedProvider { provider, .. } => ApiError::UnsupportedProvider {
                provider,
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::MissingProviderId { provider, .. } => ApiError::OAuthExchange {
                message: format!("{} payload is missing the provider id", provider),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                log::error!("Auth error: {}", other);
                ApiError::Internal {
                    message: "Authentication operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert outbound HTTP errors (OAuth code exchange, userinfo fetch)
impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(e: reqwest::Error) -> Self {
        ApiError::OAuthExchange {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
