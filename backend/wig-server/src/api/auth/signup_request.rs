use crate::api::error::{ApiError, Result as ApiResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl SignupRequest {
    #[track_caller]
    pub fn validate(&self) -> ApiResult<()> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(ApiError::Validation {
                message: "A valid email is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation {
                message: "Password is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "Name is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
