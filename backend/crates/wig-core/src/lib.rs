pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::auth_provider::AuthProvider;
pub use models::role::Role;
pub use models::user::User;
