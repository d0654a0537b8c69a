//! Normalization of provider-specific OAuth payloads.
//!
//! Each provider returns a differently shaped userinfo document:
//!
//! - Google: flat `{sub, email, name, picture}`
//! - Kakao: `{id, kakao_account: {email, profile: {nickname, profile_image_url}}}`
//! - Naver: `{resultcode, message, response: {id, email, name, profile_image}}`
//!
//! All three are reduced to the same four-field record. Only the provider id
//! is mandatory; it is the one identifier every provider reliably supplies.

use crate::{AuthError, Result as AuthErrorResult};

use wig_core::AuthProvider;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;

/// A provider identity reduced to the common shape consumed by the
/// resolution policy. Ephemeral, produced per login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthUserInfo {
    pub provider_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl OAuthUserInfo {
    /// Extract the normalized identity from a raw provider payload.
    ///
    /// The match is exhaustive over the closed provider set, so adding a
    /// provider is a compile-time-checked extension. `Local` is not an
    /// OAuth provider and is a hard rejection.
    #[track_caller]
    pub fn from_attributes(
        provider: AuthProvider,
        attributes: &Value,
    ) -> AuthErrorResult<Self> {
        let (provider_id, email, name, profile_image_url) = match provider {
            AuthProvider::Local => {
                return Err(AuthError::UnsupportedProvider {
                    provider: provider.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            AuthProvider::Google => (
                id_text(attributes.get("sub")),
                text(attributes.get("email")),
                text(attributes.get("name")),
                text(attributes.get("picture")),
            ),
            AuthProvider::Kakao => {
                let account = attributes.get("kakao_account");
                let profile = account.and_then(|a| a.get("profile"));
                (
                    // Kakao ids are numeric in the raw payload
                    id_text(attributes.get("id")),
                    text(account.and_then(|a| a.get("email"))),
                    text(profile.and_then(|p| p.get("nickname"))),
                    text(profile.and_then(|p| p.get("profile_image_url"))),
                )
            }
            AuthProvider::Naver => {
                // Naver nests the actual record under "response"
                let response = attributes.get("response");
                (
                    id_text(response.and_then(|r| r.get("id"))),
                    text(response.and_then(|r| r.get("email"))),
                    text(response.and_then(|r| r.get("name"))),
                    text(response.and_then(|r| r.get("profile_image"))),
                )
            }
        };

        let provider_id = provider_id.ok_or_else(|| AuthError::MissingProviderId {
            provider: provider.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            provider_id,
            email,
            name,
            profile_image_url,
        })
    }

    /// Email used as the account lookup key: the provider-supplied address
    /// when present and non-blank, otherwise the synthesized placeholder
    /// `{provider_id}@{provider}.oauth`.
    pub fn resolution_email(&self, provider: AuthProvider) -> String {
        match &self.email {
            Some(email) if !email.trim().is_empty() => email.clone(),
            _ => format!("{}@{}.oauth", self.provider_id, provider.slug()),
        }
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Provider ids may arrive as strings or numbers
fn id_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
