//! Signed-in user session as issued by the identity provider.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only copy of the provider's session, persisted to browser storage
/// between page loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// `password` or a federated provider id such as `google.com`.
    pub provider_id: String,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Name shown in the header: display name, else email, else uid.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.email.as_deref().filter(|email| !email.is_empty()))
            .unwrap_or(&self.uid)
    }
}
