//! Outbound OAuth client: authorization URLs, code exchange, userinfo fetch.
//!
//! Endpoint URLs are fixed public constants per provider; only the client
//! credentials come from configuration.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::config::{Config, OAuthClientConfig};

use wig_core::AuthProvider;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::Value;

struct ProviderEndpoints {
    authorize_url: &'static str,
    token_url: &'static str,
    userinfo_url: &'static str,
    scope: &'static str,
}

fn endpoints(provider: AuthProvider) -> Option<ProviderEndpoints> {
    match provider {
        AuthProvider::Local => None,
        AuthProvider::Google => Some(ProviderEndpoints {
            authorize_url: "https://accounts.google.com/o/oauth2/v2/auth",
            token_url: "https://oauth2.googleapis.com/token",
            userinfo_url: "https://openidconnect.googleapis.com/v1/userinfo",
            scope: "openid email profile",
        }),
        AuthProvider::Kakao => Some(ProviderEndpoints {
            authorize_url: "https://kauth.kakao.com/oauth/authorize",
            token_url: "https://kauth.kakao.com/oauth/token",
            userinfo_url: "https://kapi.kakao.com/v2/user/me",
            scope: "account_email profile_nickname profile_image",
        }),
        AuthProvider::Naver => Some(ProviderEndpoints {
            authorize_url: "https://nid.naver.com/oauth2.0/authorize",
            token_url: "https://nid.naver.com/oauth2.0/token",
            userinfo_url: "https://openapi.naver.com/v1/nid/me",
            scope: "",
        }),
    }
}

#[derive(Debug, Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
}

pub struct OAuthClient {
    http: reqwest::Client,
    google: Option<OAuthClientConfig>,
    kakao: Option<OAuthClientConfig>,
    naver: Option<OAuthClientConfig>,
}

impl OAuthClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            google: config.google.clone(),
            kakao: config.kakao.clone(),
            naver: config.naver.clone(),
        }
    }

    fn credentials(&self, provider: AuthProvider) -> Option<&OAuthClientConfig> {
        match provider {
            AuthProvider::Local => None,
            AuthProvider::Google => self.google.as_ref(),
            AuthProvider::Kakao => self.kakao.as_ref(),
            AuthProvider::Naver => self.naver.as_ref(),
        }
    }

    #[track_caller]
    fn required(&self, provider: AuthProvider) -> ApiResult<(&OAuthClientConfig, ProviderEndpoints)> {
        // A provider without registered credentials is a deployment gap,
        // surfaced the same way as an unknown provider name
        match (self.credentials(provider), endpoints(provider)) {
            (Some(creds), Some(eps)) => Ok((creds, eps)),
            _ => {
                log::error!("OAuth provider {} is not configured", provider.slug());
                Err(ApiError::UnsupportedProvider {
                    provider: provider.slug().to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    /// Build the provider authorize URL the browser is redirected to
    #[track_caller]
    pub fn authorization_url(&self, provider: AuthProvider) -> ApiResult<String> {
        let (creds, eps) = self.required(provider)?;

        let mut url = format!(
            "{}?response_type=code&client_id={}&redirect_uri={}",
            eps.authorize_url,
            urlencoding::encode(&creds.client_id),
            urlencoding::encode(&creds.redirect_uri),
        );
        if !eps.scope.is_empty() {
            url.push_str(&format!("&scope={}", urlencoding::encode(eps.scope)));
        }

        Ok(url)
    }

    /// Exchange the authorization code for an access token and fetch the
    /// provider's raw userinfo payload.
    pub async fn fetch_user_attributes(
        &self,
        provider: AuthProvider,
        code: &str,
    ) -> ApiResult<Value> {
        let (creds, eps) = self.required(provider)?;

        let exchange: TokenExchangeResponse = self
            .http
            .post(eps.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", &creds.client_id),
                ("client_secret", &creds.client_secret),
                ("redirect_uri", &creds.redirect_uri),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let attributes: Value = self
            .http
            .get(eps.userinfo_url)
            .bearer_auth(&exchange.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(attributes)
    }
}
