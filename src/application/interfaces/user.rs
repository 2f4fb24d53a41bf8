use crate::application::models::user::{UpdateUserRequest, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the user profile service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets a profile by user identifier
    async fn get_user(&self, user_id: i64) -> Result<User, AppError>;

    /// Updates a profile; the password only changes when the request sets it
    async fn update_user(
        &self,
        user_id: i64,
        request: &UpdateUserRequest,
    ) -> Result<(), AppError>;

    /// Deletes an account
    async fn delete_user(&self, user_id: i64) -> Result<(), AppError>;

    /// Looks a profile up by username
    async fn get_by_username(&self, username: &str) -> Result<User, AppError>;

    /// Looks a profile up by email address
    async fn get_by_email(&self, email: &str) -> Result<User, AppError>;
}
