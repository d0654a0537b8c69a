use crate::api::oauth::completion::completion_redirect_url;

use wig_core::{AuthProvider, Role, User};

use chrono::Utc;

fn oauth_user(profile_image_url: Option<&str>) -> User {
    let now = Utc::now();
    User {
        id: 7,
        email: "user@gmail.com".to_string(),
        password_hash: None,
        name: "Jane Doe".to_string(),
        role: Role::User,
        provider: AuthProvider::Google,
        provider_id: Some("1234567890".to_string()),
        profile_image_url: profile_image_url.map(str::to_string),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn redirect_url_carries_token_and_display_fields_percent_encoded() {
    let user = oauth_user(None);

    let url = completion_redirect_url("http://localhost:3000", "tok.en", &user);

    assert!(url.starts_with("http://localhost:3000/oauth/callback?"));
    assert!(url.contains("token=tok.en"));
    assert!(url.contains("email=user%40gmail.com"));
    assert!(url.contains("name=Jane%20Doe"));
    assert!(url.contains("provider=GOOGLE"));
    assert!(!url.contains("profileImageUrl"));
}

#[test]
fn redirect_url_includes_profile_image_when_present() {
    let user = oauth_user(Some("https://lh3.googleusercontent.com/a/photo?sz=50"));

    let url = completion_redirect_url("http://localhost:3000", "tok", &user);

    assert!(url.contains(
        "profileImageUrl=https%3A%2F%2Flh3.googleusercontent.com%2Fa%2Fphoto%3Fsz%3D50"
    ));
}
