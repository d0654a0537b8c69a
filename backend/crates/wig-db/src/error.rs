use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// Email uniqueness violation; the resolution policy treats this as a
    /// lost creation race and retries as an update
    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    /// A stored row failed to map back into a domain value
    #[error("Corrupt row: {message} {location}")]
    CorruptRow {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        match &source {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::UniqueViolation {
                message: db.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => Self::Sqlx {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
