use serde::Deserialize;

/// Query parameters of the provider redirect back to us
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: String,
    /// Echoed opaque value; present with some providers, unused here
    #[serde(default)]
    pub state: Option<String>,
}
