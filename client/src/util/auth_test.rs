use super::*;
use chrono::Utc;

use crate::state::session::Session;

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    let state = AuthState { session: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::pending()));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = AuthState::resolved(Some(Session {
        uid: "u1".to_owned(),
        email: Some("alice@example.com".to_owned()),
        display_name: Some("Alice".to_owned()),
        photo_url: None,
        provider_id: "password".to_owned(),
        id_token: "t".to_owned(),
        refresh_token: String::new(),
        expires_at: Utc::now(),
    }));
    assert!(state.is_signed_in());
    assert!(!should_redirect_unauth(&state));
}
