//! API representations of stored posts.
//!
//! The HTTP layer renders the author as a display string
//! (`"{firstName} {lastName}"`). The structured author form never leaves
//! the store.

use chrono::{DateTime, Utc};
use quill_persistence::BlogPost;
use serde::{Deserialize, Serialize};

/// A blog post as rendered by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBody {
    /// Store-assigned identifier.
    pub id: String,
    /// Author display string.
    pub author: String,
    /// Post title.
    pub title: String,
    /// Post body text.
    pub content: String,
    /// Store-assigned creation timestamp.
    pub created: DateTime<Utc>,
}

impl From<BlogPost> for PostBody {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id().to_string(),
            author: post.author().display_name(),
            title: post.title().to_string(),
            content: post.content().to_string(),
            created: post.created(),
        }
    }
}

/// The collection envelope returned by `GET /blog-posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionBody {
    /// Every post in the store.
    pub blog_posts: Vec<PostBody>,
}

impl CollectionBody {
    /// Builds the envelope from stored posts.
    pub fn from_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            blog_posts: posts.into_iter().map(PostBody::from).collect(),
        }
    }
}
