use crate::error::{Result as ServerErrorResult, ServerError};

use wig_core::AuthProvider;

use std::net::SocketAddr;

/// OAuth client registration for one provider
#[derive(Debug, Clone)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: wig.db)
    pub database_path: String,

    /// Base64-encoded HS256 secret for session tokens
    pub jwt_secret: String,

    /// Session token lifetime in milliseconds (default: 3600000)
    pub jwt_expiration_ms: i64,

    /// Frontend base URL for the OAuth completion redirect
    /// (default: http://localhost:3000)
    pub frontend_url: String,

    /// Public base URL of this server, used to derive OAuth redirect URIs
    /// (default: http://localhost:8080)
    pub public_base_url: String,

    /// Log level (default: info)
    pub log_level: String,

    /// Enable colored logs (default: true)
    pub log_colored: bool,

    pub google: Option<OAuthClientConfig>,
    pub kakao: Option<OAuthClientConfig>,
    pub naver: Option<OAuthClientConfig>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ServerError::EnvVar {
            message: "JWT_SECRET is required (base64-encoded HS256 secret)".to_string(),
        })?;

        let jwt_expiration_ms = std::env::var("JWT_EXPIRATION_MS")
            .unwrap_or_else(|_| "3600000".to_string())
            .parse()
            .map_err(|e| ServerError::EnvVar {
                message: format!("JWT_EXPIRATION_MS must be an integer: {}", e),
            })?;

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let config = Self {
            bind_addr,
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "wig.db".to_string()),
            jwt_secret,
            jwt_expiration_ms,
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            google: provider_from_env(&public_base_url, AuthProvider::Google),
            kakao: provider_from_env(&public_base_url, AuthProvider::Kakao),
            naver: provider_from_env(&public_base_url, AuthProvider::Naver),
            public_base_url,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_colored: std::env::var("LOG_COLORED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        };

        Ok(config)
    }

    pub fn provider(&self, provider: AuthProvider) -> Option<&OAuthClientConfig> {
        match provider {
            AuthProvider::Local => None,
            AuthProvider::Google => self.google.as_ref(),
            AuthProvider::Kakao => self.kakao.as_ref(),
            AuthProvider::Naver => self.naver.as_ref(),
        }
    }

    /// Log a redacted summary at startup
    pub fn log_summary(&self) {
        log::info!("Bind address: {}", self.bind_addr);
        log::info!("Database: {}", self.database_path);
        log::info!("Token lifetime: {}ms", self.jwt_expiration_ms);
        log::info!("Frontend URL: {}", self.frontend_url);
        for provider in [AuthProvider::Google, AuthProvider::Kakao, AuthProvider::Naver] {
            let state = if self.provider(provider).is_some() {
                "configured"
            } else {
                "not configured"
            };
            log::info!("OAuth {}: {}", provider.slug(), state);
        }
    }
}

/// Read `{PROVIDER}_CLIENT_ID` / `{PROVIDER}_CLIENT_SECRET`; a provider
/// missing either credential is simply not offered for login.
fn provider_from_env(public_base_url: &str, provider: AuthProvider) -> Option<OAuthClientConfig> {
    let prefix = provider.as_str();
    let client_id = std::env::var(format!("{}_CLIENT_ID", prefix)).ok()?;
    let client_secret = std::env::var(format!("{}_CLIENT_SECRET", prefix)).ok()?;
    let redirect_uri = std::env::var(format!("{}_REDIRECT_URI", prefix)).unwrap_or_else(|_| {
        format!("{}/login/oauth2/code/{}", public_base_url, provider.slug())
    });

    Some(OAuthClientConfig {
        client_id,
        client_secret,
        redirect_uri,
    })
}
