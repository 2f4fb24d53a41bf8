use crate::application::models::chat::{ChatMessage, Conversation};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the direct-message service
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Gets the message history between two users
    ///
    /// The backend only serves the thread when the authenticated user is
    /// one of the two participants.
    async fn get_thread(&self, a: i64, b: i64) -> Result<Vec<ChatMessage>, AppError>;

    /// Gets the authenticated user's conversation summaries
    async fn get_conversations(&self) -> Result<Vec<Conversation>, AppError>;

    /// Marks every message from the given peer as read
    async fn mark_read(&self, user_id: i64, peer_id: i64) -> Result<(), AppError>;

    /// Sends a direct message
    async fn send(&self, message: &ChatMessage) -> Result<ChatMessage, AppError>;
}
