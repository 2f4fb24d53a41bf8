use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A site-wide announcement published by the operators
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    /// Unique identifier of the announcement
    pub id: i64,
    /// Announcement title
    pub title: String,
    /// Announcement body
    pub body: Option<String>,
    /// Publication timestamp
    #[serde(rename = "createdAt")]
    pub created_at: Option<NaiveDateTime>,
}
