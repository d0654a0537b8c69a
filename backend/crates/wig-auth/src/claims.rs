use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims. The subject is the user's email, the only stable
/// natural key shared by local and OAuth accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (email)
    pub sub: String,
    /// Role name ("USER" / "ADMIN")
    pub role: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (email) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.role.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "role".to_string(),
                message: "role cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
