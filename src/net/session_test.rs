use super::*;

fn tokens(access: &str, refresh: &str) -> AuthTokens {
    AuthTokens {
        access_token: access.to_owned(),
        refresh_token: refresh.to_owned(),
    }
}

#[test]
fn store_tokens_holds_exactly_the_stored_pair() {
    clear();
    store_tokens(&tokens("A1", "R1"));
    assert_eq!(access_token().as_deref(), Some("A1"));
    assert_eq!(refresh_token().as_deref(), Some("R1"));
    assert!(has_session());
}

#[test]
fn absence_of_tokens_reads_as_unauthenticated() {
    clear();
    assert_eq!(access_token(), None);
    assert_eq!(refresh_token(), None);
    assert!(!has_session());
}

#[test]
fn apply_refresh_without_rotation_keeps_old_refresh_token() {
    clear();
    store_tokens(&tokens("A1", "R1"));
    apply_refresh(&RefreshResponse {
        access_token: "A2".to_owned(),
        refresh_token: None,
    });
    assert_eq!(access_token().as_deref(), Some("A2"));
    assert_eq!(refresh_token().as_deref(), Some("R1"));
}

#[test]
fn apply_refresh_with_rotation_replaces_both_tokens() {
    clear();
    store_tokens(&tokens("A1", "R1"));
    apply_refresh(&RefreshResponse {
        access_token: "A2".to_owned(),
        refresh_token: Some("R2".to_owned()),
    });
    assert_eq!(access_token().as_deref(), Some("A2"));
    assert_eq!(refresh_token().as_deref(), Some("R2"));
}

#[test]
fn clear_is_idempotent() {
    clear();
    store_tokens(&tokens("A1", "R1"));
    clear();
    assert!(!has_session());
    clear();
    assert_eq!(access_token(), None);
    assert_eq!(refresh_token(), None);
}

#[test]
fn repeated_reads_are_stable() {
    clear();
    store_tokens(&tokens("A1", "R1"));
    assert_eq!(access_token(), access_token());
    assert_eq!(refresh_token(), refresh_token());
}
