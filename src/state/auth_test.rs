use super::*;
use crate::net::types::AuthTokens;

fn profile(roles: &[&str]) -> UserProfile {
    UserProfile {
        id: "u1".to_owned(),
        name: "Dee".to_owned(),
        email: "dee@example.com".to_owned(),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    }
}

#[test]
fn begin_check_skips_network_without_token() {
    assert_eq!(begin_check(false), SessionPhase::Unauthenticated);
    assert_eq!(begin_check(true), SessionPhase::Checking);
}

#[test]
fn apply_check_result_adopts_profile_on_success() {
    let mut state = AuthState {
        phase: SessionPhase::Checking,
        user: None,
    };
    apply_check_result(&mut state, Some(profile(&["OPERATOR"])));
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.role(), Role::Operator);
    assert!(state.signed_in());
}

#[test]
fn apply_check_result_settles_unauthenticated_on_failure() {
    let mut state = AuthState {
        phase: SessionPhase::Checking,
        user: Some(profile(&["USER"])),
    };
    apply_check_result(&mut state, None);
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(state.user.is_none());
}

#[test]
fn sign_out_clears_store_and_is_idempotent() {
    session::store_tokens(&AuthTokens {
        access_token: "A1".to_owned(),
        refresh_token: "R1".to_owned(),
    });
    let mut state = AuthState {
        phase: SessionPhase::Authenticated,
        user: Some(profile(&["USER"])),
    };
    sign_out(&mut state);
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(!session::has_session());

    sign_out(&mut state);
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(state.user.is_none());
}

#[test]
fn loading_covers_unknown_and_checking_only() {
    let mut state = AuthState::default();
    assert!(state.loading());
    state.phase = SessionPhase::Checking;
    assert!(state.loading());
    state.phase = SessionPhase::Unauthenticated;
    assert!(!state.loading());
}

#[test]
fn role_defaults_to_user_without_profile() {
    assert_eq!(AuthState::default().role(), Role::User);
}
