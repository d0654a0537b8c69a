//! Repository tests against an in-memory SQLite database.

use wig_core::{AuthProvider, Role};
use wig_db::{DbError, UserRepository};

use sqlx::SqlitePool;

async fn test_repo() -> UserRepository {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    UserRepository::new(pool)
}

#[tokio::test]
async fn create_local_round_trips_every_field() {
    let repo = test_repo().await;

    let user = repo.create_local("a@x.com", "phc-hash", "Alice").await.unwrap();

    assert!(user.id >= 1);
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.password_hash.as_deref(), Some("phc-hash"));
    assert_eq!(user.name, "Alice");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.provider, AuthProvider::Local);
    assert!(user.provider_id.is_none());
    assert!(user.profile_image_url.is_none());
    assert!(user.is_local());

    let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
}

#[tokio::test]
async fn create_oauth_round_trips_every_field() {
    let repo = test_repo().await;

    let user = repo
        .create_oauth(
            "user@gmail.com",
            "Jane",
            AuthProvider::Google,
            "1234567890",
            Some("https://example.com/p.png"),
        )
        .await
        .unwrap();

    assert_eq!(user.provider, AuthProvider::Google);
    assert_eq!(user.provider_id.as_deref(), Some("1234567890"));
    assert_eq!(user.profile_image_url.as_deref(), Some("https://example.com/p.png"));
    assert!(user.password_hash.is_none());
    assert!(!user.is_local());

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.email, "user@gmail.com");
}

#[tokio::test]
async fn duplicate_email_reports_unique_violation() {
    let repo = test_repo().await;

    repo.create_local("a@x.com", "h1", "Alice").await.unwrap();

    let result = repo.create_local("a@x.com", "h2", "Other Alice").await;
    assert!(matches!(result, Err(DbError::UniqueViolation { .. })));

    let result = repo
        .create_oauth("a@x.com", "Alice", AuthProvider::Google, "g-1", None)
        .await;
    assert!(matches!(result, Err(DbError::UniqueViolation { .. })));
}

#[tokio::test]
async fn exists_by_email_tracks_registration() {
    let repo = test_repo().await;

    assert!(!repo.exists_by_email("a@x.com").await.unwrap());
    repo.create_local("a@x.com", "h1", "Alice").await.unwrap();
    assert!(repo.exists_by_email("a@x.com").await.unwrap());
}

#[tokio::test]
async fn find_by_email_returns_none_for_unknown_address() {
    let repo = test_repo().await;

    assert!(repo.find_by_email("ghost@x.com").await.unwrap().is_none());
    assert!(repo.find_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn update_oauth_profile_replaces_provided_fields() {
    let repo = test_repo().await;

    let user = repo
        .create_oauth("user@gmail.com", "Jane", AuthProvider::Google, "g-1", None)
        .await
        .unwrap();

    let updated = repo
        .update_oauth_profile(user.id, Some("Jane Doe"), Some("https://example.com/new.png"))
        .await
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.profile_image_url.as_deref(), Some("https://example.com/new.png"));
    // Identity fields are untouched
    assert_eq!(updated.email, "user@gmail.com");
    assert_eq!(updated.provider, AuthProvider::Google);
    assert_eq!(updated.provider_id.as_deref(), Some("g-1"));
}

#[tokio::test]
async fn update_oauth_profile_keeps_existing_values_for_absent_fields() {
    let repo = test_repo().await;

    let user = repo
        .create_oauth(
            "user@gmail.com",
            "Jane",
            AuthProvider::Google,
            "g-1",
            Some("https://example.com/p.png"),
        )
        .await
        .unwrap();

    let updated = repo.update_oauth_profile(user.id, None, None).await.unwrap();

    assert_eq!(updated.name, "Jane");
    assert_eq!(updated.profile_image_url.as_deref(), Some("https://example.com/p.png"));
}
