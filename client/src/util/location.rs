//! Browser location helpers for the federated sign-in redirect.
//!
//! Requires a browser environment; SSR paths return `None` or no-op.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Full current URL, including the query the identity provider appended.
pub fn current_href() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Absolute URL of `path` on the current origin, or `path` itself when the
/// origin is unknown.
pub fn absolute_url(path: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return join_origin(&origin, path);
        }
    }
    path.to_owned()
}

/// Leave the app for an external URL.
pub fn redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn join_origin(origin: &str, path: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
}
