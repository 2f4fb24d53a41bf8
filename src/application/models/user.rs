use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Role assigned to an account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Regular account
    User,
    /// Administrator
    Admin,
}

/// A user profile as returned by the backend
///
/// The password field is only ever sent client-to-server and is skipped
/// when absent so profile round-trips never leak it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier of the user
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    /// Username
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Email address
    pub email: String,
    /// Write-only password, set on registration or password change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Avatar URL
    #[serde(rename = "profileImageUrl")]
    pub profile_image_url: Option<String>,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: Option<NaiveDateTime>,
    /// Last-update timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<NaiveDateTime>,
    /// Whether the account is active
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
    /// Assigned role
    pub role: Option<UserRole>,
}

/// Payload for updating a profile; the password is only changed when set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateUserRequest {
    /// New username
    #[serde(rename = "userName")]
    pub user_name: String,
    /// New email address
    pub email: String,
    /// New password, left unchanged when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New avatar URL, left unchanged when absent
    #[serde(rename = "profileImageUrl", skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
}
