//! User entity - the single identity record for local and OAuth accounts.

use crate::{AuthProvider, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user identity. Local accounts carry a password hash and no provider id;
/// OAuth accounts carry a provider id and no password hash. Email is unique
/// across all users regardless of origin and is the JWT subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Argon2 PHC string for local accounts. Never serialized.
    #[serde(skip_serializing)]
    #[serde(default)]
    pub password_hash: Option<String>,
    pub name: String,
    pub role: Role,
    pub provider: AuthProvider,
    /// Provider-assigned external id, present only for OAuth accounts
    pub provider_id: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this account was registered with email/password
    pub fn is_local(&self) -> bool {
        self.provider == AuthProvider::Local
    }
}
