#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_href_is_none_in_non_hydrate_tests() {
    assert!(current_href().is_none());
}

#[test]
fn absolute_url_falls_back_to_path() {
    assert_eq!(absolute_url("/login"), "/login");
}

#[test]
fn join_origin_normalizes_slashes() {
    assert_eq!(join_origin("https://app.test/", "/login"), "https://app.test/login");
    assert_eq!(join_origin("https://app.test", "login"), "https://app.test/login");
}

#[test]
fn redirect_is_noop_but_callable() {
    redirect("https://accounts.example/consent");
}
