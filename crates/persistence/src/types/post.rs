//! Blog post document types.
//!
//! This module defines the [`BlogPost`] document together with the payloads
//! used to create and update one. Wire names are camelCase (`firstName`,
//! `lastName`, `created`) to match the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured author value carried by every blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Author's first name.
    pub first_name: String,
    /// Author's last name.
    pub last_name: String,
}

impl Author {
    /// Creates an author from first and last name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns the API display form, `"{firstName} {lastName}"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A blog post document with store-assigned metadata.
///
/// `id` and `created` are assigned exactly once when the store inserts the
/// document and are immutable thereafter; [`BlogPost::apply`] only touches
/// the client-editable fields.
///
/// # Examples
///
/// ```
/// use quill_persistence::types::{Author, BlogPost, NewPost};
///
/// let post = BlogPost::new(NewPost {
///     author: Author::new("Ada", "Lovelace"),
///     title: "Notes on the engine".to_string(),
///     content: "First entry.".to_string(),
/// });
///
/// assert!(!post.id().is_empty());
/// assert_eq!(post.title(), "Notes on the engine");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Opaque unique identifier, assigned on insert.
    id: String,

    /// Structured author value.
    author: Author,

    /// Post title, non-empty.
    title: String,

    /// Free-text body.
    content: String,

    /// When the store inserted the document.
    created: DateTime<Utc>,
}

impl BlogPost {
    /// Creates a new document from a client payload, stamping `id` and
    /// `created`.
    pub fn new(new: NewPost) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: new.author,
            title: new.title,
            content: new.content,
            created: Utc::now(),
        }
    }

    /// Reconstructs a document from already-stored data.
    pub fn from_storage(
        id: impl Into<String>,
        author: Author,
        title: impl Into<String>,
        content: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            author,
            title: title.into(),
            content: content.into(),
            created,
        }
    }

    /// Returns the document id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the structured author.
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the insertion timestamp.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Applies a partial update. Only submitted fields change; `id` and
    /// `created` are untouchable.
    pub fn apply(&mut self, changes: PostUpdate) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
    }
}

/// Client payload for creating a post. Never carries `id` or `created`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    /// Structured author value.
    pub author: Author,
    /// Post title, non-empty.
    pub title: String,
    /// Free-text body.
    pub content: String,
}

/// Partial update payload. Omitted fields retain their prior values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    /// New title, if submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New body text, if submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// New author, if submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl PostUpdate {
    /// Returns true when no field was submitted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}
