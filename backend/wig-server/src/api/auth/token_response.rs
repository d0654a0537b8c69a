use wig_core::User;

use serde::Serialize;

/// Successful login response carrying the session token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: i64,
    pub email: String,
    pub name: String,
}

impl TokenResponse {
    pub fn of(access_token: String, user: &User) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
