//! # Swaply Client
//!
//! Typed async client for the Swaply marketplace REST API: listings,
//! auctions, cart, orders, direct messages, community threads, user
//! profiles, authentication, file uploads and announcements.
//!
//! All requests flow through a single transport ([`transport::SwaplyHttpClient`])
//! that resolves paths against one configurable base URL and attaches
//! `Authorization: Bearer <token>` whenever the injected
//! [`session::TokenStore`] holds a token. Each resource family is exposed as
//! a trait plus an implementation generic over the transport, so services
//! can be mocked independently.
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//! use swaply_client::prelude::*;
//!
//! let config = Arc::new(Config::new());
//! let tokens = TokenStore::new();
//! let client = Arc::new(SwaplyHttpClientImpl::new(config.clone(), tokens.clone())?);
//!
//! let auth = AuthServiceImpl::new(config.clone(), client.clone(), tokens);
//! auth.login_from_config().await?;
//!
//! let listings = ListingServiceImpl::new(config, client);
//! let latest = listings.get_latest_listings(20).await?;
//! ```

/// Service layer: models, interfaces and implementations per resource family
pub mod application;
/// Client configuration loaded from the environment
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Commonly used re-exports
pub mod prelude;
/// Bearer-token storage
pub mod session;
/// HTTP transport
pub mod transport;
/// Environment and logging helpers
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
