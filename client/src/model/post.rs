//! Blog post entity plus the create-form draft that produces new posts.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use chrono::{DateTime, Utc};

/// A published post as read back from the document store.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    /// Client-generated identifier (UUID string).
    pub id: String,
    pub title: String,
    /// Free text; paragraphs are separated by `\n`.
    pub description: String,
    /// Ordered tags, possibly empty.
    pub tags: Vec<String>,
    /// Optional cover image URL.
    pub image: Option<String>,
    /// Server-assigned creation time, `None` until resolved.
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Description split into display paragraphs, one per `\n`-separated line.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<&str> {
        self.description.split('\n').collect()
    }

    /// Route of the single-post view for this post.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/blog/{}", self.id)
    }
}

/// First post whose id equals `id` exactly, in collection order.
#[must_use]
pub fn select_post(posts: Vec<Post>, id: &str) -> Option<Post> {
    posts.into_iter().find(|post| post.id == id)
}

/// A post ready to be written. The store assigns the creation timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPost {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
}

impl NewPost {
    /// Validate a draft and assign a fresh UUID v4 identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] when title or description is blank.
    pub fn from_draft(draft: &PostDraft) -> Result<Self, DraftError> {
        let valid = draft.validate()?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: valid.title,
            description: valid.description,
            tags: valid.tags,
            image: None,
        })
    }
}

/// Raw create-form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    /// Comma-separated tag list as typed.
    pub tags_input: String,
}

/// Draft fields after trimming and tag parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Title and description are required.")]
    MissingFields,
}

impl PostDraft {
    /// Trim the text fields, require both, and parse tags.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingFields`] when title or description is blank.
    pub fn validate(&self) -> Result<ValidDraft, DraftError> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(DraftError::MissingFields);
        }
        Ok(ValidDraft {
            title: title.to_owned(),
            description: description.to_owned(),
            tags: parse_tags(&self.tags_input),
        })
    }
}

/// Split on commas, trim each entry, and drop empty ones.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}
