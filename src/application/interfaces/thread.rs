use crate::application::models::thread::{
    CreateReplyRequest, CreateThreadRequest, PagedResponse, Thread, ThreadListQuery, ThreadReply,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the community thread service
#[async_trait]
pub trait ThreadService: Send + Sync {
    /// Lists threads, newest first, with optional text and category filters
    async fn list(&self, query: &ThreadListQuery) -> Result<PagedResponse<Thread>, AppError>;

    /// Gets a single thread
    ///
    /// # Arguments
    /// * `id` - Thread identifier
    /// * `increment_views` - Whether the backend should count this fetch
    ///   as a view
    async fn get(&self, id: i64, increment_views: bool) -> Result<Thread, AppError>;

    /// Creates a thread authored by the authenticated user
    async fn create(&self, request: &CreateThreadRequest) -> Result<Thread, AppError>;

    /// Likes a thread, returning the updated thread
    async fn like(&self, id: i64) -> Result<Thread, AppError>;

    /// Removes a like from a thread, returning the updated thread
    async fn unlike(&self, id: i64) -> Result<Thread, AppError>;

    /// Lists a thread's replies, oldest first
    async fn list_replies(
        &self,
        id: i64,
        page: u32,
        size: u32,
    ) -> Result<PagedResponse<ThreadReply>, AppError>;

    /// Adds a reply authored by the authenticated user
    async fn add_reply(
        &self,
        id: i64,
        request: &CreateReplyRequest,
    ) -> Result<ThreadReply, AppError>;
}
