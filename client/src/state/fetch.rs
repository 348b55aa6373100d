//! Fetch-and-render lifecycle shared by the listing and single-post views.
//!
//! SYSTEM CONTEXT
//! ==============
//! A view takes an [`Activation`] ticket when it mounts (or when the user asks
//! to refetch), starts exactly one store call, and applies the result only if
//! the ticket is still current. Cleanup deactivates, so a response arriving
//! after unmount is discarded.
//!
//! States only move `Loading -> Success | Failure`. Going back to `Loading`
//! needs a new ticket.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::post::Post;
use crate::net::store::{PostStore, StoreError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Store rejection; displays the rejection's own message.
    #[error("{0}")]
    Transport(String),
    #[error("Post not found")]
    NotFound,
}

impl FetchError {
    /// Heading for the failure panel of the single-post view.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            Self::NotFound => "Post Not Found",
            Self::Transport(_) => "Error",
        }
    }
}

impl From<StoreError> for FetchError {
    fn from(err: StoreError) -> Self {
        Self::Transport(err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failure(FetchError),
    Success(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// The four mutually exclusive renderings of the listing view.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingPhase {
    Loading,
    Failure(String),
    Empty,
    Populated(Vec<Post>),
}

impl From<&FetchState<Vec<Post>>> for ListingPhase {
    fn from(state: &FetchState<Vec<Post>>) -> Self {
        match state {
            FetchState::Loading => Self::Loading,
            FetchState::Failure(err) => Self::Failure(err.to_string()),
            FetchState::Success(posts) if posts.is_empty() => Self::Empty,
            FetchState::Success(posts) => Self::Populated(posts.clone()),
        }
    }
}

/// Fetch the whole collection for the listing view.
pub async fn load_listing(store: &dyn PostStore) -> FetchState<Vec<Post>> {
    match store.fetch_all().await {
        Ok(posts) => FetchState::Success(posts),
        Err(err) => FetchState::Failure(err.into()),
    }
}

/// Point lookup for the single-post view. An absent id is a failure.
pub async fn load_post(store: &dyn PostStore, id: &str) -> FetchState<Post> {
    match store.fetch_by_id(id).await {
        Ok(Some(post)) => FetchState::Success(post),
        Ok(None) => FetchState::Failure(FetchError::NotFound),
        Err(err) => FetchState::Failure(err.into()),
    }
}

/// Generation counter deciding whether a fetch result may still be applied.
#[derive(Clone, Debug, Default)]
pub struct Activation {
    generation: Arc<AtomicU64>,
}

/// Proof that a fetch was started under a given generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Activation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding any outstanding one.
    #[must_use]
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Invalidate every outstanding ticket.
    pub fn deactivate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
