pub mod claims;
pub mod error;
pub mod oauth;
pub mod password;
pub mod token_service;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use oauth::user_info::OAuthUserInfo;
pub use token_service::TokenService;

#[cfg(test)]
mod tests;
