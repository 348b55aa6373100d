//! Authentication session provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `SessionProvider`, subscribes once to mirror the session
//! into `RwSignal<AuthState>`, and passes the provider to the pages that
//! sign users in or out. Pages never write the session themselves.
//!
//! DESIGN
//! ======
//! - The provider is the single writer of the current session; every change
//!   goes through `set_session`, which persists and then notifies.
//! - `subscribe` returns a [`Subscription`] guard. Dropping it removes the
//!   listener, so teardown cannot leak a callback.
//! - Listeners run outside the internal locks, so a listener may call back
//!   into the provider.
//! - ID tokens expire after about an hour. Callers get a token through
//!   [`SessionProvider::fresh_id_token`], which trades the refresh token for a
//!   new pair first when needed. A session that cannot be refreshed is signed
//!   out, which notifies listeners like any other change.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use chrono::{DateTime, Duration, Utc};

use crate::config::BackendConfig;
use crate::net::http::BrowserHttp;
use crate::net::identity::{AuthError, FederatedProvider, IdentityApi, IdentityToolkitClient};
use crate::net::store::TokenSource;
use crate::util::storage::{BrowserStorage, KeyValueStore};

pub use crate::model::session::Session;

/// Persisted session JSON.
pub const SESSION_KEY: &str = "quill.session";
/// `sessionId` of an in-flight federated sign-in.
pub const PENDING_IDP_KEY: &str = "quill.pending_idp";
/// Refresh this long before the provider's stated expiry.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

type Listener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

struct Inner {
    identity: Arc<dyn IdentityApi>,
    persisted: Arc<dyn KeyValueStore>,
    pending: Arc<dyn KeyValueStore>,
    current: Mutex<Option<Session>>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cheaply cloneable handle to the shared session.
#[derive(Clone)]
pub struct SessionProvider {
    inner: Arc<Inner>,
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    inner: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner.listeners).retain(|(id, _)| *id != self.id);
        }
    }
}

impl SessionProvider {
    pub fn new(
        identity: Arc<dyn IdentityApi>,
        persisted: Arc<dyn KeyValueStore>,
        pending: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                identity,
                persisted,
                pending,
                current: Mutex::new(None),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Identity Toolkit over `gloo-net`, persisted in browser storage.
    #[must_use]
    pub fn browser(config: BackendConfig) -> Self {
        let identity = IdentityToolkitClient::new(config, Arc::new(BrowserHttp));
        Self::new(
            Arc::new(identity),
            Arc::new(BrowserStorage::local()),
            Arc::new(BrowserStorage::session()),
        )
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        lock(&self.inner.current).clone()
    }

    /// Bearer token for store requests, refreshed first when it is about to
    /// expire. `None` when nobody is signed in or the refresh was rejected.
    pub async fn fresh_id_token(&self, now: DateTime<Utc>) -> Option<String> {
        let session = self.current()?;
        if !needs_refresh(&session, now) {
            return Some(session.id_token);
        }
        let stale_refresh = session.refresh_token.clone();
        let refreshed = self.refreshed(session).await;
        // A sign-in or sign-out during the exchange wins over its result.
        let still_current = lock(&self.inner.current)
            .as_ref()
            .is_some_and(|current| current.refresh_token == stale_refresh);
        if !still_current {
            return self.current().map(|s| s.id_token);
        }
        let token = refreshed.as_ref().map(|s| s.id_token.clone());
        self.set_session(refreshed);
        token
    }

    /// Register `listener` for every subsequent session change.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Session>) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.listeners).push((id, Arc::new(listener)));
        Subscription { id, inner: Arc::downgrade(&self.inner) }
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        lock(&self.inner.listeners).len()
    }

    /// Load the persisted session and publish it. An expired session is
    /// refreshed when possible and dropped otherwise. Always notifies, so
    /// subscribers learn that the initial state has resolved even when
    /// nobody is signed in.
    pub async fn restore(&self, now: DateTime<Utc>) -> Option<Session> {
        let stored = self
            .inner
            .persisted
            .get(SESSION_KEY)
            .and_then(|raw| match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    leptos::logging::warn!("discarding unreadable stored session: {e}");
                    None
                }
            });
        let restored = match stored {
            Some(session) if needs_refresh(&session, now) => self.refreshed(session).await,
            other => other,
        };
        self.set_session(restored.clone());
        restored
    }

    /// # Errors
    ///
    /// Returns the provider's rejection as an [`AuthError`].
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.inner.identity.sign_in_with_password(email, password).await?;
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    /// # Errors
    ///
    /// Returns the provider's rejection as an [`AuthError`].
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.inner.identity.sign_up(email, password).await?;
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    pub fn sign_out(&self) {
        self.set_session(None);
    }

    /// Start a federated sign-in and return the consent URL to redirect to.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection as an [`AuthError`].
    pub async fn begin_federated_sign_in(
        &self,
        provider: FederatedProvider,
        continue_uri: &str,
    ) -> Result<String, AuthError> {
        let grant = self.inner.identity.create_auth_uri(provider, continue_uri).await?;
        self.inner.pending.set(PENDING_IDP_KEY, &grant.session_id);
        Ok(grant.auth_uri)
    }

    #[must_use]
    pub fn has_pending_federated_sign_in(&self) -> bool {
        self.inner.pending.get(PENDING_IDP_KEY).is_some()
    }

    /// Finish a federated sign-in from the URL the provider redirected back to.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingFederatedState`] when no sign-in was started in this
    /// tab, otherwise the provider's rejection.
    pub async fn complete_federated_sign_in(&self, request_uri: &str) -> Result<Session, AuthError> {
        let session_id = self
            .inner
            .pending
            .get(PENDING_IDP_KEY)
            .ok_or(AuthError::MissingFederatedState)?;
        self.inner.pending.remove(PENDING_IDP_KEY);
        let session = self.inner.identity.sign_in_with_idp(request_uri, &session_id).await?;
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    /// `session` with tokens from the refresh exchange, or `None` when it has
    /// no refresh token or the provider rejects it.
    async fn refreshed(&self, session: Session) -> Option<Session> {
        if session.refresh_token.is_empty() {
            return None;
        }
        let exchanged = self.inner.identity.refresh(&session.refresh_token).await;
        match exchanged {
            Ok(tokens) => Some(Session {
                id_token: tokens.id_token,
                refresh_token: tokens.refresh_token,
                expires_at: tokens.expires_at,
                ..session
            }),
            Err(e) => {
                leptos::logging::warn!("session refresh for {} failed: {e}", session.uid);
                None
            }
        }
    }

    fn set_session(&self, session: Option<Session>) {
        match &session {
            Some(s) => match serde_json::to_string(s) {
                Ok(raw) => self.inner.persisted.set(SESSION_KEY, &raw),
                Err(e) => leptos::logging::warn!("session not persisted: {e}"),
            },
            None => self.inner.persisted.remove(SESSION_KEY),
        }
        *lock(&self.inner.current) = session;
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.current();
        let listeners: Vec<Listener> =
            lock(&self.inner.listeners).iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(snapshot.as_ref());
        }
    }
}

fn needs_refresh(session: &Session, now: DateTime<Utc>) -> bool {
    session.is_expired(now + Duration::seconds(EXPIRY_MARGIN_SECS))
}

#[async_trait::async_trait(?Send)]
impl TokenSource for SessionProvider {
    async fn bearer_token(&self) -> Option<String> {
        self.fresh_id_token(Utc::now()).await
    }
}
