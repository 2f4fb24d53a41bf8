use crate::application::interfaces::auth::AuthService;
use crate::application::models::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::application::models::user::User;
use crate::config::Config;
use crate::error::AppError;
use crate::session::TokenStore;
use crate::transport::SwaplyHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

const AUTH_BASE: &str = "/api/auth";

/// Implementation of the authentication service
///
/// Holds the same [`TokenStore`] the transport reads from: a successful
/// login makes every subsequent request on that transport authenticated.
pub struct AuthServiceImpl<T: SwaplyHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
    tokens: TokenStore,
}

impl<T: SwaplyHttpClient> AuthServiceImpl<T> {
    /// Creates a new instance of the auth service
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials
    /// * `client` - HTTP transport to dispatch through
    /// * `tokens` - The token store shared with that transport
    pub fn new(config: Arc<Config>, client: Arc<T>, tokens: TokenStore) -> Self {
        Self {
            config,
            client,
            tokens,
        }
    }

    /// Gets the token store this service writes to
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }
}

#[async_trait]
impl<T: SwaplyHttpClient + 'static> AuthService for AuthServiceImpl<T> {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        info!("Logging in as {}", request.user_name);
        let response: LoginResponse = self
            .client
            .request(Method::POST, &format!("{AUTH_BASE}/login"), Some(request))
            .await?;

        self.tokens.set(&response.token).await;
        info!("✓ Login successful, user: {}", response.user.user_name);
        Ok(response)
    }

    async fn login_from_config(&self) -> Result<LoginResponse, AppError> {
        let request = LoginRequest {
            user_name: self.config.credentials.username.clone(),
            password: self.config.credentials.password.clone(),
        };
        self.login(&request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, AppError> {
        info!("Registering account {}", request.user_name);
        self.client
            .request::<RegisterRequest, User>(
                Method::POST,
                &format!("{AUTH_BASE}/register"),
                Some(request),
            )
            .await
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.tokens.clear().await;
        info!("✓ Logged out");
        Ok(())
    }
}
