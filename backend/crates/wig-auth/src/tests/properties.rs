use crate::{OAuthUserInfo, TokenService};

use wig_core::{AuthProvider, Role};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use proptest::prelude::*;

fn test_service() -> TokenService {
    TokenService::new(&BASE64.encode(b"property-test-secret-32-bytes-ok"), 3_600_000).unwrap()
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::User), Just(Role::Admin)]
}

fn provider_strategy() -> impl Strategy<Value = AuthProvider> {
    prop_oneof![
        Just(AuthProvider::Google),
        Just(AuthProvider::Kakao),
        Just(AuthProvider::Naver),
    ]
}

fn info_without_email(provider_id: String) -> OAuthUserInfo {
    OAuthUserInfo {
        provider_id,
        email: None,
        name: None,
        profile_image_url: None,
    }
}

proptest! {
    #[test]
    fn verify_of_issue_round_trips_subject_and_role(
        email in "[a-z]{1,12}@[a-z]{1,8}\\.(com|net|org)",
        role in role_strategy(),
    ) {
        let service = test_service();
        let token = service.issue(&email, role).unwrap();
        let claims = service.verify(&token).unwrap();

        prop_assert_eq!(claims.sub, email);
        prop_assert_eq!(claims.role, role.as_str());
    }

    // Two different accounts on the same provider can never collide on the
    // synthesized placeholder: ids differ, so emails differ.
    #[test]
    fn placeholder_emails_are_injective_over_provider_ids(
        id_a in "[a-z0-9]{1,16}",
        id_b in "[a-z0-9]{1,16}",
        provider in provider_strategy(),
    ) {
        prop_assume!(id_a != id_b);

        let email_a = info_without_email(id_a).resolution_email(provider);
        let email_b = info_without_email(id_b).resolution_email(provider);

        prop_assert_ne!(email_a, email_b);
    }

    // The provider name is baked into the placeholder, so the same external
    // id on two providers still resolves to two distinct accounts.
    #[test]
    fn placeholder_emails_differ_across_providers(
        id in "[a-z0-9]{1,16}",
        provider_a in provider_strategy(),
        provider_b in provider_strategy(),
    ) {
        prop_assume!(provider_a != provider_b);

        let email_a = info_without_email(id.clone()).resolution_email(provider_a);
        let email_b = info_without_email(id).resolution_email(provider_b);

        prop_assert_ne!(email_a, email_b);
    }
}
