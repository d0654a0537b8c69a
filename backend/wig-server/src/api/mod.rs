pub mod auth;
pub mod authenticate;
pub mod error;
pub mod extractors;
pub mod oauth;
