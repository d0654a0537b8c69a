//! Identity resolution: map a normalized provider identity to a local user.
//!
//! Decision procedure, one logical unit per login attempt:
//! 1. resolution email = provider email, or `{id}@{provider}.oauth`
//! 2. existing account with same origin   -> refresh name/profile image
//! 3. existing account with other origin  -> conflict, never a silent merge
//! 4. no account                          -> create (role=USER, no password)
//!
//! Two concurrent first logins for the same email race to step 4; the
//! store's uniqueness constraint decides the winner and the loser retries
//! as step 2.

use crate::api::error::{ApiError, Result as ApiResult};

use wig_auth::OAuthUserInfo;
use wig_core::{AuthProvider, User};
use wig_db::{DbError, UserRepository};

use std::panic::Location;

use error_location::ErrorLocation;

/// Name stored when the provider supplies none
const DEFAULT_NAME: &str = "User";

pub async fn resolve_oauth_user(
    repo: &UserRepository,
    provider: AuthProvider,
    info: &OAuthUserInfo,
) -> ApiResult<User> {
    let email = info.resolution_email(provider);

    if let Some(existing) = repo.find_by_email(&email).await? {
        return apply_relogin(repo, provider, existing, info).await;
    }

    let name = info.name.as_deref().unwrap_or(DEFAULT_NAME);

    match repo
        .create_oauth(
            &email,
            name,
            provider,
            &info.provider_id,
            info.profile_image_url.as_deref(),
        )
        .await
    {
        Ok(user) => {
            log::info!("OAuth signup: email={}, provider={}", user.email, provider);
            Ok(user)
        }
        Err(DbError::UniqueViolation { .. }) => {
            // Lost the creation race to a concurrent first login
            let existing = repo.find_by_email(&email).await?.ok_or_else(|| {
                ApiError::Internal {
                    message: format!("user {} missing after uniqueness conflict", email),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;
            apply_relogin(repo, provider, existing, info).await
        }
        Err(e) => Err(e.into()),
    }
}

/// Re-login for an existing account: same origin refreshes the mutable
/// profile fields, a different origin is rejected outright.
async fn apply_relogin(
    repo: &UserRepository,
    provider: AuthProvider,
    user: User,
    info: &OAuthUserInfo,
) -> ApiResult<User> {
    if user.provider != provider {
        return Err(ApiError::ProviderConflict {
            email: user.email,
            existing: user.provider,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let updated = repo
        .update_oauth_profile(
            user.id,
            info.name.as_deref(),
            info.profile_image_url.as_deref(),
        )
        .await?;

    Ok(updated)
}
