use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Author block embedded in threads and replies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    /// Identifier of the author
    pub id: i64,
    /// Display name of the author
    pub name: String,
}

/// Aggregate counters for a thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadStats {
    /// Number of replies
    pub replies: u32,
    /// Number of likes
    pub likes: u32,
    /// Number of views; absent on endpoints that do not track views
    pub views: Option<u32>,
}

/// A community thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thread {
    /// Unique identifier of the thread
    pub id: i64,
    /// Thread title
    pub title: String,
    /// Thread body
    pub body: String,
    /// Category tag, e.g. "GENERAL", "GUIDE", "REQUEST"
    pub category: Option<String>,
    /// Author of the thread
    pub author: Author,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    /// Aggregate counters
    pub stats: ThreadStats,
}

/// A reply within a thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadReply {
    /// Unique identifier of the reply
    pub id: i64,
    /// Reply body
    pub body: String,
    /// Author of the reply
    pub author: Author,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}

/// One page of a paged collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PagedResponse<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// One-based page number
    pub page: u32,
    /// Requested page size
    pub size: u32,
    /// Total number of items across all pages
    pub total: u64,
}

/// Payload for creating a thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateThreadRequest {
    /// Thread title
    pub title: String,
    /// Thread body
    pub body: String,
    /// Category tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Payload for replying to a thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateReplyRequest {
    /// Reply body
    pub body: String,
}

/// Filters for listing threads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadListQuery {
    /// One-based page number; backend default is the first page
    pub page: Option<u32>,
    /// Page size; backend clamps to its own maximum
    pub size: Option<u32>,
    /// Free-text search over title and body
    pub q: Option<String>,
    /// Restrict to one category tag
    pub category: Option<String>,
}

impl ThreadListQuery {
    /// Creates an empty query matching every thread
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the free-text filter
    #[must_use]
    pub fn with_text(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Sets the category filter
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
