use crate::application::interfaces::chat::ChatService;
use crate::application::models::chat::{ChatMessage, Conversation};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::SwaplyHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;

const CHAT_BASE: &str = "/api/chat";

/// Implementation of the direct-message service
///
/// Real-time delivery runs over the backend's WebSocket channel and is out
/// of scope here; these are the REST endpoints for history, summaries and
/// sending.
pub struct ChatServiceImpl<T: SwaplyHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: SwaplyHttpClient> ChatServiceImpl<T> {
    /// Creates a new instance of the chat service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: SwaplyHttpClient + 'static> ChatService for ChatServiceImpl<T> {
    async fn get_thread(&self, a: i64, b: i64) -> Result<Vec<ChatMessage>, AppError> {
        let path = format!("{CHAT_BASE}/thread?a={a}&b={b}");
        self.client
            .request::<(), Vec<ChatMessage>>(Method::GET, &path, None)
            .await
    }

    async fn get_conversations(&self) -> Result<Vec<Conversation>, AppError> {
        self.client
            .request::<(), Vec<Conversation>>(
                Method::GET,
                &format!("{CHAT_BASE}/conversations"),
                None,
            )
            .await
    }

    async fn mark_read(&self, user_id: i64, peer_id: i64) -> Result<(), AppError> {
        let path = format!("{CHAT_BASE}/mark-read?userId={user_id}&peerId={peer_id}");
        self.client
            .request_no_content::<()>(Method::POST, &path, None)
            .await
    }

    async fn send(&self, message: &ChatMessage) -> Result<ChatMessage, AppError> {
        self.client
            .request::<ChatMessage, ChatMessage>(
                Method::POST,
                &format!("{CHAT_BASE}/send"),
                Some(message),
            )
            .await
    }
}
