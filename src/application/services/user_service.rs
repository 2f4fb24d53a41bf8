use crate::application::interfaces::user::UserService;
use crate::application::models::user::{UpdateUserRequest, User};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::SwaplyHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

const USER_BASE: &str = "/api/user";

/// Implementation of the user profile service
pub struct UserServiceImpl<T: SwaplyHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: SwaplyHttpClient> UserServiceImpl<T> {
    /// Creates a new instance of the user service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: SwaplyHttpClient + 'static> UserService for UserServiceImpl<T> {
    async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        let path = format!("{USER_BASE}/{user_id}");
        self.client.request::<(), User>(Method::GET, &path, None).await
    }

    async fn update_user(
        &self,
        user_id: i64,
        request: &UpdateUserRequest,
    ) -> Result<(), AppError> {
        // The backend acknowledges with a plain-text body, not the profile
        let path = format!("{USER_BASE}/{user_id}");
        info!("Updating profile of user {}", user_id);
        self.client
            .request_no_content::<UpdateUserRequest>(Method::PUT, &path, Some(request))
            .await
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), AppError> {
        let path = format!("{USER_BASE}/{user_id}");
        info!("Deleting user {}", user_id);
        self.client
            .request_no_content::<()>(Method::DELETE, &path, None)
            .await
    }

    async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        let path = format!("{USER_BASE}/username/{}", urlencoding::encode(username));
        self.client.request::<(), User>(Method::GET, &path, None).await
    }

    async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        let path = format!("{USER_BASE}/email/{}", urlencoding::encode(email));
        self.client.request::<(), User>(Method::GET, &path, None).await
    }
}
