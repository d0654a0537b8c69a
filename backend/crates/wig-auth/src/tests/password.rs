use crate::password::{hash_password, verify_password};

#[test]
fn given_hashed_password_when_verified_with_same_password_then_succeeds() {
    let hash = hash_password("p1").unwrap();

    assert!(verify_password("p1", &hash));
}

#[test]
fn given_hashed_password_when_verified_with_wrong_password_then_fails() {
    let hash = hash_password("p1").unwrap();

    assert!(!verify_password("p2", &hash));
}

#[test]
fn given_same_password_when_hashed_twice_then_salts_differ() {
    let first = hash_password("p1").unwrap();
    let second = hash_password("p1").unwrap();

    assert_ne!(first, second);
}

#[test]
fn given_invalid_stored_hash_when_verified_then_fails_closed() {
    assert!(!verify_password("p1", "not-a-phc-string"));
    assert!(!verify_password("p1", ""));
}
