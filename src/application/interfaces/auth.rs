use crate::application::models::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::application::models::user::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for authentication
///
/// A successful login stores the returned bearer token in the injected
/// [`crate::session::TokenStore`]; every transport sharing that store picks
/// it up on its next request.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in with explicit credentials and stores the returned token
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;

    /// Logs in with the credentials from the configuration
    async fn login_from_config(&self) -> Result<LoginResponse, AppError>;

    /// Registers a new account; does not log in
    async fn register(&self, request: &RegisterRequest) -> Result<User, AppError>;

    /// Clears the stored token; the backend keeps no session state
    async fn logout(&self) -> Result<(), AppError>;
}
