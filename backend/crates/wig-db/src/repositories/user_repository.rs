//! User repository - the credential store behind authentication.
//!
//! The only component in the auth path that performs blocking I/O. Identity
//! creation relies on the `users.email` uniqueness constraint rather than
//! application-level locking.

use crate::{DbError, Result as DbErrorResult};

use wig_core::{AuthProvider, Role, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const USER_COLUMNS: &str = "id, email, password_hash, name, role, provider, \
     provider_id, profile_image_url, created_at, updated_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a locally-registered user (password hash present, no provider id)
    pub async fn create_local(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> DbErrorResult<User> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (email, password_hash, name, role, provider, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(Role::User.as_str())
        .bind(AuthProvider::Local.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.require_by_id(result.last_insert_rowid()).await
    }

    /// Create an OAuth user (provider id present, no password hash)
    pub async fn create_oauth(
        &self,
        email: &str,
        name: &str,
        provider: AuthProvider,
        provider_id: &str,
        profile_image_url: Option<&str>,
    ) -> DbErrorResult<User> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (email, name, role, provider, provider_id, profile_image_url, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(Role::User.as_str())
        .bind(provider.as_str())
        .bind(provider_id)
        .bind(profile_image_url)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.require_by_id(result.last_insert_rowid()).await
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE email = ?",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn exists_by_email(&self, email: &str) -> DbErrorResult<bool> {
        let row = sqlx::query("SELECT 1 FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Refresh the mutable OAuth fields on re-login. Name and profile image
    /// only; email, role, provider and provider id are never touched here.
    pub async fn update_oauth_profile(
        &self,
        id: i64,
        name: Option<&str>,
        profile_image_url: Option<&str>,
    ) -> DbErrorResult<User> {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                UPDATE users
                SET name = COALESCE(?, name),
                    profile_image_url = COALESCE(?, profile_image_url),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(profile_image_url)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.require_by_id(id).await
    }

    async fn require_by_id(&self, id: i64) -> DbErrorResult<User> {
        self.find_by_id(id).await?.ok_or_else(|| DbError::CorruptRow {
            message: format!("user {} vanished between write and read", id),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[track_caller]
fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let role: String = row.try_get("role")?;
    let provider: String = row.try_get("provider")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        name: row.try_get("name")?,
        role: Role::from_str(&role).map_err(|e| DbError::CorruptRow {
            message: format!("invalid role in users.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        provider: AuthProvider::from_str(&provider).map_err(|e| DbError::CorruptRow {
            message: format!("invalid provider in users.provider: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        provider_id: row.try_get("provider_id")?,
        profile_image_url: row.try_get("profile_image_url")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::CorruptRow {
                message: "invalid timestamp in users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::CorruptRow {
                message: "invalid timestamp in users.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
