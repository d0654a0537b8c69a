use crate::{AuthError, Claims, Result as AuthErrorResult};

use wig_core::Role;

use std::panic::Location;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues and verifies HS256 session tokens.
///
/// The signing key is derived once from the configured base64 secret; after
/// construction every operation is pure and safe to call from any number of
/// concurrent requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime_ms: i64,
}

impl TokenService {
    /// Create a token service from a base64-encoded secret and a token
    /// lifetime in milliseconds.
    #[track_caller]
    pub fn new(base64_secret: &str, lifetime_ms: i64) -> AuthErrorResult<Self> {
        let key_bytes = BASE64
            .decode(base64_secret)
            .map_err(|e| AuthError::InvalidSecret {
                message: format!("secret is not valid base64: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: the expiry instant itself is already invalid
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(&key_bytes),
            decoding_key: DecodingKey::from_secret(&key_bytes),
            validation,
            lifetime_ms,
        })
    }

    /// Issue a signed token with `sub`, `role`, `iat` and `exp` claims
    #[track_caller]
    pub fn issue(&self, email: &str, role: Role) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            role: role.as_str().to_string(),
            iat: now,
            exp: now + self.lifetime_ms / 1000,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature, structure and expiry, returning the claims.
    ///
    /// Never partially trusts an unverified payload: claims are only read
    /// after the signature check succeeds.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        let claims = token_data.claims;
        claims.validate()?;

        // Inclusive boundary: a token presented at its exact expiry instant
        // is already expired.
        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }

    /// Extract the token from an `Authorization` header value.
    ///
    /// Recognizes only the exact form `"Bearer " + token`; any other shape
    /// (missing header, wrong scheme, empty token) yields `None`.
    pub fn extract_bearer(header_value: Option<&str>) -> Option<&str> {
        header_value?
            .strip_prefix("Bearer ")
            .filter(|token| !token.is_empty())
    }
}
