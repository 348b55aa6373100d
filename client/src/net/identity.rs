//! Identity Toolkit REST client: password and federated sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::session::SessionProvider` is the only caller. It owns persistence
//! and listener fan-out; this module only turns provider calls into
//! [`Session`] values or readable [`AuthError`]s.
//!
//! FEDERATED FLOW
//! ==============
//! `accounts:createAuthUri` returns the provider consent URL plus an opaque
//! `sessionId`. After the browser returns to `continue_uri`, the full return
//! URL and that `sessionId` go to `accounts:signInWithIdp`.
//!
//! ID tokens live about an hour. The secure-token service trades the
//! long-lived refresh token for a new pair (`grant_type=refresh_token`).

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use super::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::BackendConfig;
use crate::model::session::Session;

pub const PASSWORD_PROVIDER: &str = "password";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Transport(String),
    #[error("{}", friendly_message(.code, .message))]
    Provider { code: String, message: String },
    #[error("unexpected response from identity provider: {0}")]
    Decode(String),
    #[error("Sign-in session expired. Please try again.")]
    MissingFederatedState,
}

impl From<HttpError> for AuthError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Readable text for an Identity Toolkit error code.
#[must_use]
pub fn friendly_message(code: &str, message: &str) -> String {
    let text = match code {
        "INVALID_LOGIN_CREDENTIALS" | "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" => {
            "Invalid email or password."
        }
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "WEAK_PASSWORD" => "Password should be at least 6 characters.",
        "INVALID_EMAIL" => "Please enter a valid email address.",
        "MISSING_PASSWORD" => "Please enter a password.",
        "USER_DISABLED" => "This account has been disabled.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Please try again later.",
        "OPERATION_NOT_ALLOWED" => "This sign-in method is not enabled.",
        "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" => {
            "Your session has expired. Please sign in again."
        }
        _ if message.is_empty() => code,
        _ => message,
    };
    text.to_owned()
}

/// Split `"WEAK_PASSWORD : Password should be..."` into code and detail.
fn split_provider_message(raw: &str) -> (String, String) {
    match raw.split_once(':') {
        Some((code, detail)) => (code.trim().to_owned(), detail.trim().to_owned()),
        None => (raw.trim().to_owned(), String::new()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FederatedProvider {
    Google,
}

impl FederatedProvider {
    #[must_use]
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Google => "google.com",
        }
    }
}

/// Consent URL and the state needed to finish the flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUriGrant {
    pub auth_uri: String,
    pub session_id: String,
}

/// New credentials from a refresh-token exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshedTokens {
    pub id_token: String,
    /// The service may rotate the refresh token; always keep the latest.
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Calls the session provider makes against the identity service.
#[async_trait::async_trait(?Send)]
pub trait IdentityApi: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn create_auth_uri(
        &self,
        provider: FederatedProvider,
        continue_uri: &str,
    ) -> Result<AuthUriGrant, AuthError>;

    async fn sign_in_with_idp(&self, request_uri: &str, session_id: &str) -> Result<Session, AuthError>;

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, AuthError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    provider_id: Option<String>,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
    /// Seconds, sent as a decimal string.
    expires_in: String,
}

impl TokenResponse {
    fn into_session(self, fallback_provider: &str) -> Result<Session, AuthError> {
        let expires_at = expiry_from_now(&self.expires_in)?;
        Ok(Session {
            uid: self.local_id,
            email: self.email.filter(|e| !e.is_empty()),
            display_name: self.display_name.filter(|n| !n.is_empty()),
            photo_url: self.photo_url.filter(|u| !u.is_empty()),
            provider_id: self.provider_id.unwrap_or_else(|| fallback_provider.to_owned()),
            id_token: self.id_token,
            refresh_token: self.refresh_token,
            expires_at,
        })
    }
}

/// Secure-token responses use snake_case, unlike the accounts API.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

fn expiry_from_now(expires_in: &str) -> Result<DateTime<Utc>, AuthError> {
    let seconds: i64 = expires_in
        .trim()
        .parse()
        .map_err(|_| AuthError::Decode(format!("expiresIn {expires_in:?}")))?;
    Ok(Utc::now() + Duration::seconds(seconds))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAuthUriResponse {
    #[serde(default)]
    auth_uri: String,
    #[serde(default)]
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Identity Toolkit v1 implementation of [`IdentityApi`].
#[derive(Clone)]
pub struct IdentityToolkitClient {
    config: BackendConfig,
    http: Arc<dyn HttpClient>,
}

impl IdentityToolkitClient {
    pub fn new(config: BackendConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    fn endpoint(&self, method: &str) -> Result<String, AuthError> {
        let raw = format!("{}/accounts:{method}", self.config.identity_url.trim_end_matches('/'));
        let mut url = url::Url::parse(&raw).map_err(|e| AuthError::Transport(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url.into())
    }

    fn token_endpoint(&self) -> Result<String, AuthError> {
        let raw = format!("{}/token", self.config.secure_token_url.trim_end_matches('/'));
        let mut url = url::Url::parse(&raw).map_err(|e| AuthError::Transport(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url.into())
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T, AuthError> {
        let url = self.endpoint(method)?;
        self.post(url, body).await
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        body: serde_json::Value,
    ) -> Result<T, AuthError> {
        let resp = self.http.send(HttpRequest::post(url, body)).await?;
        decode(&resp)
    }
}

fn decode<T: serde::de::DeserializeOwned>(resp: &HttpResponse) -> Result<T, AuthError> {
    if !resp.is_success() {
        let raw = resp
            .json::<ErrorEnvelope>()
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| format!("HTTP {}", resp.status));
        let (code, message) = split_provider_message(&raw);
        return Err(AuthError::Provider { code, message });
    }
    resp.json().map_err(|e| AuthError::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl IdentityApi for IdentityToolkitClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let token: TokenResponse = self.call("signInWithPassword", body).await?;
        token.into_session(PASSWORD_PROVIDER)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let token: TokenResponse = self.call("signUp", body).await?;
        token.into_session(PASSWORD_PROVIDER)
    }

    async fn create_auth_uri(
        &self,
        provider: FederatedProvider,
        continue_uri: &str,
    ) -> Result<AuthUriGrant, AuthError> {
        let body = serde_json::json!({
            "providerId": provider.provider_id(),
            "continueUri": continue_uri,
        });
        let resp: CreateAuthUriResponse = self.call("createAuthUri", body).await?;
        if resp.auth_uri.is_empty() || resp.session_id.is_empty() {
            return Err(AuthError::Decode("createAuthUri returned no authUri".to_owned()));
        }
        Ok(AuthUriGrant { auth_uri: resp.auth_uri, session_id: resp.session_id })
    }

    async fn sign_in_with_idp(&self, request_uri: &str, session_id: &str) -> Result<Session, AuthError> {
        let body = serde_json::json!({
            "requestUri": request_uri,
            "sessionId": session_id,
            "returnSecureToken": true,
            "returnIdpCredential": true,
        });
        let token: TokenResponse = self.call("signInWithIdp", body).await?;
        token.into_session(FederatedProvider::Google.provider_id())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, AuthError> {
        let body = serde_json::json!({
            "grant_type": "refresh_token",
            "refresh_token": refresh_token,
        });
        let resp: RefreshResponse = self.post(self.token_endpoint()?, body).await?;
        Ok(RefreshedTokens {
            expires_at: expiry_from_now(&resp.expires_in)?,
            id_token: resp.id_token,
            refresh_token: resp.refresh_token,
        })
    }
}
