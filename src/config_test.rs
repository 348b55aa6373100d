use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend, BackendConfig::default());
    assert!(!cfg.backend.is_configured());
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("POSTS_COLLECTION", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend.collection, "posts");
}

// =============================================================================
// overrides
// =============================================================================

#[test]
fn reads_backend_credentials() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("FIREBASE_API_KEY", "key-123"),
        ("FIREBASE_PROJECT_ID", "blog-prod"),
        ("FIRESTORE_DATABASE", "staging"),
        ("POSTS_COLLECTION", "articles"),
    ]))
    .unwrap();
    assert!(cfg.backend.is_configured());
    assert_eq!(cfg.backend.api_key, "key-123");
    assert_eq!(cfg.backend.project_id, "blog-prod");
    assert_eq!(cfg.backend.database, "staging");
    assert_eq!(cfg.backend.collection, "articles");
}

#[test]
fn emulator_urls_drop_trailing_slash() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("FIRESTORE_URL", "http://localhost:8080/v1/"),
        ("IDENTITY_URL", "http://localhost:9099/identitytoolkit.googleapis.com/v1/"),
        ("SECURE_TOKEN_URL", "http://localhost:9099/securetoken.googleapis.com/v1/"),
    ]))
    .unwrap();
    assert_eq!(cfg.backend.firestore_url, "http://localhost:8080/v1");
    assert_eq!(cfg.backend.identity_url, "http://localhost:9099/identitytoolkit.googleapis.com/v1");
    assert_eq!(cfg.backend.secure_token_url, "http://localhost:9099/securetoken.googleapis.com/v1");
}

#[test]
fn parses_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8081")])).unwrap();
    assert_eq!(cfg.port, 8081);
}

// =============================================================================
// errors
// =============================================================================

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"http\"");
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn from_env_reads_process_environment() {
    // Only checks the wiring; PORT may be set by the harness.
    let direct = ServerConfig::from_lookup(|key| std::env::var(key).ok());
    let via_env = ServerConfig::from_env();
    assert_eq!(direct.is_ok(), via_env.is_ok());
}
