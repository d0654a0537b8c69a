//! Provider login completion: hand the session token off to the frontend.

use wig_core::User;

/// Build the frontend redirect URL after a successful provider login.
///
/// This is the single place a token travels in a URL instead of a header;
/// the browser arriving from the provider cannot present one yet. All
/// values are percent-encoded.
pub fn completion_redirect_url(frontend_url: &str, token: &str, user: &User) -> String {
    let mut url = format!(
        "{}/oauth/callback?token={}&email={}&name={}&provider={}",
        frontend_url,
        urlencoding::encode(token),
        urlencoding::encode(&user.email),
        urlencoding::encode(&user.name),
        user.provider.as_str(),
    );

    if let Some(image) = user.profile_image_url.as_deref().filter(|s| !s.is_empty()) {
        url.push_str("&profileImageUrl=");
        url.push_str(&urlencoding::encode(image));
    }

    url
}
