use crate::application::interfaces::thread::ThreadService;
use crate::application::models::thread::{
    CreateReplyRequest, CreateThreadRequest, PagedResponse, Thread, ThreadListQuery, ThreadReply,
};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::SwaplyHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

const THREADS_BASE: &str = "/api/threads";

/// Implementation of the community thread service
pub struct ThreadServiceImpl<T: SwaplyHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: SwaplyHttpClient> ThreadServiceImpl<T> {
    /// Creates a new instance of the thread service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

fn list_path(query: &ThreadListQuery) -> String {
    let mut params = Vec::new();
    if let Some(page) = query.page {
        params.push(format!("page={page}"));
    }
    if let Some(size) = query.size {
        params.push(format!("size={size}"));
    }
    if let Some(q) = &query.q {
        params.push(format!("q={}", urlencoding::encode(q)));
    }
    if let Some(category) = &query.category {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if params.is_empty() {
        THREADS_BASE.to_string()
    } else {
        format!("{THREADS_BASE}?{}", params.join("&"))
    }
}

#[async_trait]
impl<T: SwaplyHttpClient + 'static> ThreadService for ThreadServiceImpl<T> {
    async fn list(&self, query: &ThreadListQuery) -> Result<PagedResponse<Thread>, AppError> {
        self.client
            .request::<(), PagedResponse<Thread>>(Method::GET, &list_path(query), None)
            .await
    }

    async fn get(&self, id: i64, increment_views: bool) -> Result<Thread, AppError> {
        let path = format!("{THREADS_BASE}/{id}?inc={increment_views}");
        self.client
            .request::<(), Thread>(Method::GET, &path, None)
            .await
    }

    async fn create(&self, request: &CreateThreadRequest) -> Result<Thread, AppError> {
        info!("Creating thread '{}'", request.title);
        self.client
            .request::<CreateThreadRequest, Thread>(Method::POST, THREADS_BASE, Some(request))
            .await
    }

    async fn like(&self, id: i64) -> Result<Thread, AppError> {
        let path = format!("{THREADS_BASE}/{id}/like");
        self.client
            .request::<(), Thread>(Method::POST, &path, None)
            .await
    }

    async fn unlike(&self, id: i64) -> Result<Thread, AppError> {
        let path = format!("{THREADS_BASE}/{id}/unlike");
        self.client
            .request::<(), Thread>(Method::POST, &path, None)
            .await
    }

    async fn list_replies(
        &self,
        id: i64,
        page: u32,
        size: u32,
    ) -> Result<PagedResponse<ThreadReply>, AppError> {
        let path = format!("{THREADS_BASE}/{id}/replies?page={page}&size={size}");
        self.client
            .request::<(), PagedResponse<ThreadReply>>(Method::GET, &path, None)
            .await
    }

    async fn add_reply(
        &self,
        id: i64,
        request: &CreateReplyRequest,
    ) -> Result<ThreadReply, AppError> {
        let path = format!("{THREADS_BASE}/{id}/replies");
        self.client
            .request::<CreateReplyRequest, ThreadReply>(Method::POST, &path, Some(request))
            .await
    }
}
