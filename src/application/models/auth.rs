use crate::application::models::user::User;
use serde::{Deserialize, Serialize};

/// Credentials submitted to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Username
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Password
    pub password: String,
}

/// Successful login result: the bearer token plus the authenticated profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests
    pub token: String,
    /// Profile of the authenticated user
    pub user: User,
}

/// Payload for registering a new account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    /// Desired username
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}
