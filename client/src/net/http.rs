//! Minimal HTTP transport seam for the hosted backend clients.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR) and native builds: [`BrowserHttp`] answers every request
//! with [`HttpError::Unavailable`], since the document store and identity
//! provider are only contacted from the browser.
//!
//! DESIGN
//! ======
//! The store and identity clients depend on the [`HttpClient`] trait rather
//! than on `gloo-net` directly, so their request/response handling runs under
//! plain `#[test]` with a scripted transport.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outbound request. Bodies are always JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), bearer: None, body: None }
    }

    #[must_use]
    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Post, url: url.into(), bearer: None, body: Some(body) }
    }

    /// Attach `Authorization: Bearer <token>` when a token is present.
    #[must_use]
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not available on server")]
    Unavailable,
}

/// Transport used by the store and identity clients.
#[async_trait::async_trait(?Send)]
pub trait HttpClient: Send + Sync {
    /// Send `request` and return the raw status and body. Non-2xx statuses
    /// are returned as responses, not errors.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// `gloo-net` transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHttp;

#[async_trait::async_trait(?Send)]
impl HttpClient for BrowserHttp {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| HttpError::Network(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| HttpError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| HttpError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(HttpError::Unavailable)
        }
    }
}
