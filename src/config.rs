//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{
    BackendConfig, DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_FIRESTORE_URL, DEFAULT_IDENTITY_URL,
    DEFAULT_SECURE_TOKEN_URL,
};

pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is present but cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FIREBASE_API_KEY`, `FIREBASE_PROJECT_ID`: empty when absent
    /// - `FIRESTORE_DATABASE`: default `(default)`
    /// - `FIRESTORE_URL`, `IDENTITY_URL`, `SECURE_TOKEN_URL`: Google endpoints;
    ///   override for emulators
    /// - `POSTS_COLLECTION`: default `posts`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        let backend = BackendConfig {
            api_key: var("FIREBASE_API_KEY").unwrap_or_default(),
            project_id: var("FIREBASE_PROJECT_ID").unwrap_or_default(),
            database: var("FIRESTORE_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_owned()),
            firestore_url: base_url(var("FIRESTORE_URL"), DEFAULT_FIRESTORE_URL),
            identity_url: base_url(var("IDENTITY_URL"), DEFAULT_IDENTITY_URL),
            secure_token_url: base_url(var("SECURE_TOKEN_URL"), DEFAULT_SECURE_TOKEN_URL),
            collection: var("POSTS_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_owned()),
        };

        Ok(Self { port, backend })
    }
}

fn base_url(raw: Option<String>, default: &str) -> String {
    raw.as_deref().unwrap_or(default).trim_end_matches('/').to_owned()
}
