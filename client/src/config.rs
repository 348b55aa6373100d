//! Hosted-backend coordinates shared by the server shell and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server loads these values from its environment and embeds them in the
//! SSR shell as a `<meta>` tag. The hydrated client reads the tag back so the
//! WASM bundle never needs build-time credentials.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";
pub const DEFAULT_COLLECTION: &str = "posts";

/// `name` attribute of the `<meta>` tag carrying the serialized config.
pub const META_NAME: &str = "quill-backend";

/// Public (browser-safe) settings for the document store and identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Web API key of the hosted project. Safe to expose to the browser.
    pub api_key: String,
    pub project_id: String,
    /// Firestore database id, normally `(default)`.
    pub database: String,
    pub firestore_url: String,
    pub identity_url: String,
    /// Token service that exchanges refresh tokens for new ID tokens.
    pub secure_token_url: String,
    /// Collection holding post documents.
    pub collection: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            database: DEFAULT_DATABASE.to_owned(),
            firestore_url: DEFAULT_FIRESTORE_URL.to_owned(),
            identity_url: DEFAULT_IDENTITY_URL.to_owned(),
            secure_token_url: DEFAULT_SECURE_TOKEN_URL.to_owned(),
            collection: DEFAULT_COLLECTION.to_owned(),
        }
    }
}

impl BackendConfig {
    /// Whether both the API key and the project id are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.project_id.trim().is_empty()
    }

    /// REST root of the documents tree, e.g.
    /// `https://firestore.googleapis.com/v1/projects/p/databases/(default)/documents`.
    #[must_use]
    pub fn documents_root(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.firestore_url.trim_end_matches('/'),
            self.project_id,
            self.database
        )
    }

    /// Resource name of a post document (the form used inside request bodies).
    #[must_use]
    pub fn document_name(&self, id: &str) -> String {
        format!(
            "projects/{}/databases/{}/documents/{}/{id}",
            self.project_id, self.database, self.collection
        )
    }

    /// Serialize for the SSR shell `<meta>` tag.
    #[must_use]
    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse the `<meta>` tag content. Returns `None` for malformed input.
    #[must_use]
    pub fn from_meta_content(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Resolve the config for the running environment.
    ///
    /// In the browser this reads the `<meta>` tag written by the shell; during
    /// SSR it uses the value the server provided as context.
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            read_meta_tag().unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::prelude::use_context::<Self>().unwrap_or_default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta_tag() -> Option<BackendConfig> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{META_NAME}\"]");
    let element = document.query_selector(&selector).ok()??;
    let content = element.get_attribute("content")?;
    BackendConfig::from_meta_content(&content)
}
