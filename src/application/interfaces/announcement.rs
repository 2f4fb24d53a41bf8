use crate::application::models::announcement::Announcement;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for site-wide announcements; reads are unauthenticated
#[async_trait]
pub trait AnnouncementService: Send + Sync {
    /// Lists every published announcement
    async fn list(&self) -> Result<Vec<Announcement>, AppError>;

    /// Gets a single announcement
    async fn get(&self, id: i64) -> Result<Announcement, AppError>;
}
