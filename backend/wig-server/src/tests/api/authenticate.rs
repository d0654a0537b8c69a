use crate::api::authenticate::is_public_path;

#[test]
fn oauth_and_operational_paths_skip_authentication() {
    assert!(is_public_path("/oauth2/authorization/google"));
    assert!(is_public_path("/login/oauth2/code/kakao"));
    assert!(is_public_path("/health"));
}

#[test]
fn api_paths_go_through_authentication() {
    assert!(!is_public_path("/api/auth/me"));
    assert!(!is_public_path("/api/auth/login"));
    assert!(!is_public_path("/api/wigs"));
    assert!(!is_public_path("/"));
}
