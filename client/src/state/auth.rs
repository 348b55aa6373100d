//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` mirrors every `SessionProvider` notification into an
//! `RwSignal<AuthState>`. Route guards and the header read it to coordinate
//! login redirects and identity-dependent rendering.

use super::session::Session;

/// Authentication state tracking the current session and loading status.
///
/// `loading` stays `true` until the provider's first notification, so guards
/// do not redirect before the persisted session has been restored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the session has been restored.
    #[must_use]
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// State after a provider notification.
    #[must_use]
    pub fn resolved(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}
