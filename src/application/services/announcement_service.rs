use crate::application::interfaces::announcement::AnnouncementService;
use crate::application::models::announcement::Announcement;
use crate::error::AppError;
use crate::transport::SwaplyHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

const ANNOUNCEMENTS_BASE: &str = "/api/announcements";

/// Implementation of the announcement service
pub struct AnnouncementServiceImpl<T: SwaplyHttpClient> {
    client: Arc<T>,
}

impl<T: SwaplyHttpClient> AnnouncementServiceImpl<T> {
    /// Creates a new instance of the announcement service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: SwaplyHttpClient + 'static> AnnouncementService for AnnouncementServiceImpl<T> {
    async fn list(&self) -> Result<Vec<Announcement>, AppError> {
        self.client
            .request::<(), Vec<Announcement>>(Method::GET, ANNOUNCEMENTS_BASE, None)
            .await
    }

    async fn get(&self, id: i64) -> Result<Announcement, AppError> {
        let path = format!("{ANNOUNCEMENTS_BASE}/{id}");
        self.client
            .request::<(), Announcement>(Method::GET, &path, None)
            .await
    }
}
