use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A direct message between two users
///
/// When sending, `from_user_id` and `timestamp` may be left unset; the
/// backend fills both from the authenticated principal and its own clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Identifier of the sender
    #[serde(rename = "fromUserId")]
    pub from_user_id: Option<i64>,
    /// Identifier of the recipient
    #[serde(rename = "toUserId")]
    pub to_user_id: i64,
    /// Message text
    pub content: String,
    /// Server-side timestamp
    pub timestamp: Option<NaiveDateTime>,
}

impl ChatMessage {
    /// Creates an outgoing message to the given recipient
    pub fn to(to_user_id: i64, content: impl Into<String>) -> Self {
        Self {
            from_user_id: None,
            to_user_id,
            content: content.into(),
            timestamp: None,
        }
    }
}

/// Summary of a conversation with one peer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    /// Identifier of the peer
    #[serde(rename = "peerId")]
    pub peer_id: i64,
    /// Username of the peer
    #[serde(rename = "peerName")]
    pub peer_name: Option<String>,
    /// Avatar of the peer
    #[serde(rename = "peerAvatarUrl")]
    pub peer_avatar_url: Option<String>,
    /// Text of the most recent message
    #[serde(rename = "lastContent")]
    pub last_content: Option<String>,
    /// Timestamp of the most recent message
    #[serde(rename = "lastTimestamp")]
    pub last_timestamp: Option<NaiveDateTime>,
    /// Number of unread messages from this peer
    #[serde(rename = "unreadCount")]
    pub unread_count: u64,
}
