//! Post persistence against the hosted document store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never talk to Firestore directly. They hold an `Arc<dyn PostStore>`
//! built once by the app root, and `state::fetch` turns store results into
//! render states.
//!
//! DESIGN
//! ======
//! No retries, caching, or timeouts: each call is exactly one logical store
//! operation, and failures are surfaced to the caller unchanged.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::firestore::{
    self, CommitResponse, Document, ListDocumentsResponse, RunQueryItem, LIST_PAGE_SIZE,
};
use super::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::BackendConfig;
use crate::model::post::{select_post, NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("unexpected response from document store: {0}")]
    Decode(String),
}

impl From<HttpError> for StoreError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result of a successful create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedPost {
    pub id: String,
    /// Full resource name of the written document.
    pub document_name: String,
    /// Server-assigned creation time, when the store reported it.
    pub created_at: Option<DateTime<Utc>>,
}

/// Storage operations on the posts collection.
#[async_trait::async_trait(?Send)]
pub trait PostStore: Send + Sync {
    /// Insert one post; the store assigns `createdAt`.
    async fn create(&self, post: &NewPost) -> Result<CreatedPost, StoreError>;

    /// Every post in the collection, in store order.
    async fn fetch_all(&self) -> Result<Vec<Post>, StoreError>;

    /// The post whose `id` equals `id`, if any.
    ///
    /// The default scans [`fetch_all`](Self::fetch_all); stores with a native
    /// point lookup override it.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        Ok(select_post(self.fetch_all().await?, id))
    }
}

/// Supplies the caller's ID token, read fresh for every request.
#[async_trait::async_trait(?Send)]
pub trait TokenSource: Send + Sync {
    async fn bearer_token(&self) -> Option<String>;
}

/// Firestore REST implementation of [`PostStore`].
#[derive(Clone)]
pub struct FirestoreStore {
    config: BackendConfig,
    http: Arc<dyn HttpClient>,
    token: Option<Arc<dyn TokenSource>>,
}

impl FirestoreStore {
    pub fn new(config: BackendConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http, token: None }
    }

    /// Attach the caller's ID token to every request.
    #[must_use]
    pub fn with_token_source(mut self, token: Arc<dyn TokenSource>) -> Self {
        self.token = Some(token);
        self
    }

    fn collection_url(&self) -> Result<url::Url, StoreError> {
        let mut url = self.parse(&self.config.documents_root())?;
        url.path_segments_mut()
            .map_err(|()| StoreError::Transport("invalid document store URL".to_owned()))?
            .push(&self.config.collection);
        Ok(url)
    }

    fn document_url(&self, id: &str) -> Result<url::Url, StoreError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| StoreError::Transport("invalid document store URL".to_owned()))?
            .push(id);
        Ok(url)
    }

    /// `{documents_root}:{verb}`. The verb is appended to the last path
    /// segment, so it is built textually.
    fn root_action_url(&self, verb: &str) -> Result<url::Url, StoreError> {
        self.parse(&format!("{}:{verb}", self.config.documents_root()))
    }

    fn parse(&self, raw: &str) -> Result<url::Url, StoreError> {
        let mut url = url::Url::parse(raw).map_err(|e| StoreError::Transport(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        let bearer = match &self.token {
            Some(source) => source.bearer_token().await,
            None => None,
        };
        let request = request.with_bearer(bearer);
        Ok(self.http.send(request).await?)
    }

    async fn run_id_query(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let url = self.root_action_url("runQuery")?;
        let body = firestore::run_query_body(&self.config.collection, id);
        let resp = self.send(HttpRequest::post(url.as_str(), body)).await?;
        let items: Vec<RunQueryItem> = decode(&resp)?;
        Ok(items
            .into_iter()
            .filter_map(|item| item.document)
            .map(|doc| firestore::decode_post(&doc))
            .find(|post| post.id == id))
    }
}

fn backend_error(resp: &HttpResponse) -> StoreError {
    StoreError::Backend { status: resp.status, message: firestore::error_message(&resp.body) }
}

fn decode<T: serde::de::DeserializeOwned>(resp: &HttpResponse) -> Result<T, StoreError> {
    if !resp.is_success() {
        return Err(backend_error(resp));
    }
    resp.json().map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait::async_trait(?Send)]
impl PostStore for FirestoreStore {
    async fn create(&self, post: &NewPost) -> Result<CreatedPost, StoreError> {
        let url = self.root_action_url("commit")?;
        let document_name = self.config.document_name(&post.id);
        let body = firestore::commit_body(&document_name, post);
        let resp = self.send(HttpRequest::post(url.as_str(), body)).await?;
        let commit: CommitResponse = decode(&resp)?;
        Ok(CreatedPost { id: post.id.clone(), document_name, created_at: commit.created_at() })
    }

    async fn fetch_all(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut url = self.collection_url()?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("pageSize", &LIST_PAGE_SIZE.to_string());
                if let Some(token) = &page_token {
                    query.append_pair("pageToken", token);
                }
            }
            let resp = self.send(HttpRequest::get(url.as_str())).await?;
            let page: ListDocumentsResponse = decode(&resp)?;
            posts.extend(page.documents.iter().map(firestore::decode_post));
            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(next) if page_token.as_deref() == Some(next.as_str()) => {
                    return Err(StoreError::Decode(format!("page token {next:?} repeated")));
                }
                Some(next) => page_token = Some(next),
                None => break,
            }
        }
        Ok(posts)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        if id.is_empty() {
            return Ok(None);
        }
        let url = self.document_url(id)?;
        let resp = self.send(HttpRequest::get(url.as_str())).await?;
        if resp.status == 404 {
            return self.run_id_query(id).await;
        }
        let doc: Document = decode(&resp)?;
        let post = firestore::decode_post(&doc);
        // Another document may claim this name with a different id field.
        if post.id == id { Ok(Some(post)) } else { self.run_id_query(id).await }
    }
}
