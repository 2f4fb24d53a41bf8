//! # Swaply Client Prelude
//!
//! Imports the types and traits needed for most interactions with the
//! Swaply backend.
//!
//! ## Usage
//!
//! ```rust
//! use swaply_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8080");
//! let tokens = TokenStore::new();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Swaply API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION MANAGEMENT
// ============================================================================

/// Injected bearer-token store
pub use crate::session::TokenStore;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport trait
pub use crate::transport::SwaplyHttpClient;

/// HTTP transport implementation
pub use crate::transport::SwaplyHttpClientImpl;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::services::{
    AnnouncementService, AuctionService, AuthService, CartService, ChatService, ListingService,
    OrderService, ThreadService, UserService,
};

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

pub use crate::application::services::{
    AnnouncementServiceImpl, AuctionServiceImpl, AuthServiceImpl, CartServiceImpl,
    ChatServiceImpl, ListingServiceImpl, OrderServiceImpl, ThreadServiceImpl, UserServiceImpl,
};

// ============================================================================
// MODELS
// ============================================================================

/// Listing models and merchandise enums
pub use crate::application::models::listing::{
    Category, CreateListingRequest, Listing, ListingCondition, ListingStatus,
    UpdateListingRequest,
};

/// Auction models
pub use crate::application::models::auction::{
    Auction, AuctionStatus, CreateAuctionRequest, PlaceBidRequest,
};

/// Cart models
pub use crate::application::models::cart::{AddCartItemRequest, CartItem, CheckoutResponse};

/// Order models
pub use crate::application::models::order::{Order, OrderStatus, UpdateOrderRequest};

/// Direct-message models
pub use crate::application::models::chat::{ChatMessage, Conversation};

/// Community thread models
pub use crate::application::models::thread::{
    Author, CreateReplyRequest, CreateThreadRequest, PagedResponse, Thread, ThreadListQuery,
    ThreadReply, ThreadStats,
};

/// User models
pub use crate::application::models::user::{UpdateUserRequest, User, UserRole};

/// Authentication models
pub use crate::application::models::auth::{LoginRequest, LoginResponse, RegisterRequest};

/// File upload models
pub use crate::application::models::file::FileUploadResponse;

/// Announcement models
pub use crate::application::models::announcement::Announcement;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::NaiveDateTime;

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::Method;
