pub mod auth_provider;
pub mod role;
pub mod user;
