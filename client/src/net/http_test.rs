use super::test_helpers::ScriptedHttp;
use super::*;
use futures::executor::block_on;

#[test]
fn with_bearer_sets_and_clears_token() {
    let req = HttpRequest::get("https://x").with_bearer(Some("t".to_owned()));
    assert_eq!(req.bearer.as_deref(), Some("t"));
    assert!(req.with_bearer(None).bearer.is_none());
}

#[test]
fn post_carries_json_body() {
    let req = HttpRequest::post("https://x", serde_json::json!({ "a": 1 }));
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, Some(serde_json::json!({ "a": 1 })));
}

#[test]
fn success_range_is_2xx() {
    let ok = HttpResponse { status: 204, body: String::new() };
    let redirect = HttpResponse { status: 302, body: String::new() };
    let missing = HttpResponse { status: 404, body: String::new() };
    assert!(ok.is_success());
    assert!(!redirect.is_success());
    assert!(!missing.is_success());
}

#[test]
fn response_json_parses_body() {
    let resp = HttpResponse { status: 200, body: r#"{"n":3}"#.to_owned() };
    let value: serde_json::Value = resp.json().unwrap();
    assert_eq!(value["n"], 3);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_off_wasm() {
    let result = block_on(BrowserHttp.send(HttpRequest::get("https://x")));
    assert_eq!(result, Err(HttpError::Unavailable));
    assert_eq!(HttpError::Unavailable.to_string(), "not available on server");
}

#[test]
fn scripted_transport_replays_in_order() {
    let http = ScriptedHttp::new()
        .respond(200, serde_json::json!({ "first": true }))
        .fail(HttpError::Network("down".to_owned()));
    let first = block_on(http.send(HttpRequest::get("https://a"))).unwrap();
    assert_eq!(first.status, 200);
    let second = block_on(http.send(HttpRequest::get("https://b")));
    assert_eq!(second, Err(HttpError::Network("down".to_owned())));
    let urls: Vec<_> = http.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec!["https://a", "https://b"]);
}
