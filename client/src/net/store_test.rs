use std::sync::Arc;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::http::test_helpers::ScriptedHttp;
use crate::net::http::Method;

fn config() -> BackendConfig {
    BackendConfig {
        api_key: "k".to_owned(),
        project_id: "p".to_owned(),
        firestore_url: "https://fs.test/v1".to_owned(),
        ..BackendConfig::default()
    }
}

fn store(http: &Arc<ScriptedHttp>) -> FirestoreStore {
    let http: Arc<dyn HttpClient> = http.clone();
    FirestoreStore::new(config(), http)
}

fn doc(id: &str, title: &str) -> serde_json::Value {
    json!({
        "name": format!("projects/p/databases/(default)/documents/posts/{id}"),
        "fields": {
            "id": { "stringValue": id },
            "title": { "stringValue": title },
            "description": { "stringValue": format!("{title} body") }
        }
    })
}

fn new_post(id: &str) -> NewPost {
    NewPost {
        id: id.to_owned(),
        title: "T".to_owned(),
        description: "D".to_owned(),
        tags: Vec::new(),
        image: None,
    }
}

// =============================================================
// create
// =============================================================

#[test]
fn create_commits_named_document() {
    let http = Arc::new(ScriptedHttp::new().respond(
        200,
        json!({
            "writeResults": [{ "transformResults": [{ "timestampValue": "2025-03-04T09:05:00Z" }] }],
            "commitTime": "2025-03-04T09:05:00Z"
        }),
    ));
    let created = block_on(store(&http).create(&new_post("abc"))).unwrap();
    assert_eq!(created.id, "abc");
    assert_eq!(created.document_name, "projects/p/databases/(default)/documents/posts/abc");
    assert!(created.created_at.is_some());

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "https://fs.test/v1/projects/p/databases/(default)/documents:commit?key=k");
    let body = requests[0].body.clone().unwrap();
    assert_eq!(body["writes"][0]["currentDocument"]["exists"], false);
}

#[test]
fn create_surfaces_backend_rejection() {
    let http = Arc::new(ScriptedHttp::new().respond(
        403,
        json!({ "error": { "code": 403, "message": "Missing or insufficient permissions.", "status": "PERMISSION_DENIED" } }),
    ));
    let err = block_on(store(&http).create(&new_post("abc"))).unwrap_err();
    assert_eq!(
        err,
        StoreError::Backend { status: 403, message: "Missing or insufficient permissions.".to_owned() }
    );
    assert_eq!(err.to_string(), "Missing or insufficient permissions.");
}

struct FixedToken(Option<&'static str>);

#[async_trait::async_trait(?Send)]
impl TokenSource for FixedToken {
    async fn bearer_token(&self) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

#[test]
fn requests_without_token_source_are_anonymous() {
    let http = Arc::new(ScriptedHttp::new().respond(200, json!({})));
    block_on(store(&http).fetch_all()).unwrap();
    assert!(http.requests()[0].bearer.is_none());
}

#[test]
fn requests_carry_bearer_from_token_source() {
    let http = Arc::new(ScriptedHttp::new().respond(200, json!({})));
    let store = store(&http).with_token_source(Arc::new(FixedToken(Some("id-token"))));
    block_on(store.fetch_all()).unwrap();
    assert_eq!(http.requests()[0].bearer.as_deref(), Some("id-token"));
}

// =============================================================
// fetch_all
// =============================================================

#[test]
fn fetch_all_follows_page_tokens() {
    let http = Arc::new(
        ScriptedHttp::new()
            .respond(200, json!({ "documents": [doc("a", "A")], "nextPageToken": "next" }))
            .respond(200, json!({ "documents": [doc("b", "B")] })),
    );
    let posts = block_on(store(&http).fetch_all()).unwrap();
    let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    let urls: Vec<_> = http.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls[0], "https://fs.test/v1/projects/p/databases/(default)/documents/posts?key=k&pageSize=300");
    assert!(urls[1].ends_with("&pageToken=next"));
}

#[test]
fn fetch_all_stops_on_repeated_page_token() {
    let page = json!({ "documents": [doc("a", "A")], "nextPageToken": "same" });
    let http = Arc::new(ScriptedHttp::new().respond(200, page.clone()).respond(200, page));
    let err = block_on(store(&http).fetch_all()).unwrap_err();
    assert!(matches!(err, StoreError::Decode(ref msg) if msg.contains("same")));
    assert_eq!(http.requests().len(), 2);
}

#[test]
fn fetch_all_empty_collection_is_ok() {
    let http = Arc::new(ScriptedHttp::new().respond(200, json!({})));
    assert!(block_on(store(&http).fetch_all()).unwrap().is_empty());
}

#[test]
fn fetch_all_transport_failure_keeps_message() {
    let http = Arc::new(ScriptedHttp::new().fail(HttpError::Network("offline".to_owned())));
    let err = block_on(store(&http).fetch_all()).unwrap_err();
    assert_eq!(err.to_string(), "network error: offline");
}

#[test]
fn fetch_all_malformed_body_is_decode_error() {
    let http = Arc::new(ScriptedHttp::new().respond(200, json!({ "documents": "nope" })));
    assert!(matches!(block_on(store(&http).fetch_all()), Err(StoreError::Decode(_))));
}

// =============================================================
// fetch_by_id
// =============================================================

#[test]
fn fetch_by_id_uses_point_lookup() {
    let http = Arc::new(ScriptedHttp::new().respond(200, doc("b", "second")));
    let post = block_on(store(&http).fetch_by_id("b")).unwrap().unwrap();
    assert_eq!(post.title, "second");
    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, "https://fs.test/v1/projects/p/databases/(default)/documents/posts/b?key=k");
}

#[test]
fn fetch_by_id_falls_back_to_query_on_missing_document() {
    let http = Arc::new(
        ScriptedHttp::new()
            .respond(404, json!({ "error": { "code": 404, "message": "not found", "status": "NOT_FOUND" } }))
            .respond(200, json!([{ "document": {
                "name": "projects/p/databases/(default)/documents/posts/GeneratedName",
                "fields": { "id": { "stringValue": "b" }, "title": { "stringValue": "legacy" } }
            }}])),
    );
    let post = block_on(store(&http).fetch_by_id("b")).unwrap().unwrap();
    assert_eq!(post.title, "legacy");
    let requests = http.requests();
    assert!(requests[1].url.contains("documents:runQuery"));
}

#[test]
fn fetch_by_id_absent_everywhere_is_none() {
    let http = Arc::new(
        ScriptedHttp::new()
            .respond(404, json!({ "error": { "code": 404, "message": "not found" } }))
            .respond(200, json!([{ "readTime": "2025-01-01T00:00:00Z" }])),
    );
    assert!(block_on(store(&http).fetch_by_id("c")).unwrap().is_none());
}

#[test]
fn fetch_by_id_empty_id_skips_network() {
    let http = Arc::new(ScriptedHttp::new());
    assert!(block_on(store(&http).fetch_by_id("")).unwrap().is_none());
    assert!(http.requests().is_empty());
}

// =============================================================
// Default trait body
// =============================================================

struct ListOnly(Vec<Post>);

#[async_trait::async_trait(?Send)]
impl PostStore for ListOnly {
    async fn create(&self, _post: &NewPost) -> Result<CreatedPost, StoreError> {
        Err(StoreError::Transport("read only".to_owned()))
    }

    async fn fetch_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.0.clone())
    }
}

#[test]
fn default_fetch_by_id_scans_collection() {
    let post = |id: &str| Post {
        id: id.to_owned(),
        title: id.to_uppercase(),
        description: String::new(),
        tags: Vec::new(),
        image: None,
        created_at: None,
    };
    let store = ListOnly(vec![post("a"), post("b")]);
    assert_eq!(block_on(store.fetch_by_id("b")).unwrap().unwrap().title, "B");
    assert!(block_on(store.fetch_by_id("c")).unwrap().is_none());
}
